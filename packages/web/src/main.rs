use dioxus::prelude::*;

use views::{
    AppLayout, AuthLayout, Chatbot, Contact, ContactUs, Dashboard, Events, ForgotPassword, Forum,
    Home, Login, Mentorship, Messages, Notification, PageNotFound, Profile, Progress,
    PublicLayout, Register, Resources,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/contact")]
        Contact {},
        #[layout(AuthLayout)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
            #[route("/forgot-password")]
            ForgotPassword {},
        #[end_layout]
    #[end_layout]
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/mentorship")]
        Mentorship {},
        #[route("/messages")]
        Messages {},
        #[route("/resources")]
        Resources {},
        #[route("/events")]
        Events {},
        #[route("/forum")]
        Forum {},
        #[route("/chatbot")]
        Chatbot {},
        #[route("/notification")]
        Notification {},
        #[route("/progress")]
        Progress {},
        #[route("/ContactUs")]
        ContactUs {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::platform_config);
    tracing::debug!("Using API at {}", config.api.base_url);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ToastProvider {
            ui::SessionProvider {
                config: config,
                Router::<Route> {}
            }
        }
    }
}
