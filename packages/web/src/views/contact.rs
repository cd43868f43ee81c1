use dioxus::prelude::*;
use ui::{use_session, ContactForm};

/// Public contact page.
#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page narrow",
            h1 { "Contact us" }
            p { class: "muted", "Questions, feedback or trouble signing in? Send us a message." }
            ContactForm {}
        }
    }
}

/// Contact page inside the app, prefilled from the signed-in user.
#[component]
pub fn ContactUs() -> Element {
    let session = use_session();
    let (first_name, email) = session
        .read()
        .current_user
        .as_ref()
        .map(|u| (u.first_name.clone(), u.email.clone()))
        .unwrap_or_default();

    rsx! {
        section { class: "page narrow",
            h1 { "Support" }
            p { class: "muted", "Our team usually answers within one working day." }
            ContactForm { first_name: first_name, email: email }
        }
    }
}
