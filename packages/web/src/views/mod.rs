use dioxus::prelude::*;

mod layouts;
pub use layouts::{AppLayout, AuthLayout, PublicLayout};

mod home;
pub use home::Home;

mod contact;
pub use contact::{Contact, ContactUs};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod mentorship;
pub use mentorship::Mentorship;

mod messages;
pub use messages::Messages;

mod resources;
pub use resources::Resources;

mod events;
pub use events::Events;

mod forum;
pub use forum::Forum;

mod chatbot;
pub use chatbot::Chatbot;

mod notification;
pub use notification::Notification;

mod progress;
pub use progress::Progress;

mod not_found;
pub use not_found::PageNotFound;

/// Message shown when a profile-backed page has nothing to render.
#[component]
pub(crate) fn AccountUnavailable(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        section { class: "page narrow",
            p { class: "form-error", "{message}" }
            button { class: "button", onclick: move |_| on_retry.call(()), "Try again" }
        }
    }
}

pub(crate) const ACCOUNT_UNAVAILABLE: &str = "We couldn't load your account. Please try again.";

pub(crate) type ProfileFetch = Result<Option<api::UserProfile>, String>;

/// Fetch the signed-in user's profile.
///
/// When the user itself is still missing (the startup refresh failed or has
/// not finished) it is refreshed first, so the result never settles before
/// the user had a chance to load. An expired token logs the user out (the
/// guard then leaves the page) and yields `None`, as does a missing session.
/// Other failures come back as the message to show.
pub(crate) async fn load_profile(store: &ui::AppSession) -> ProfileFetch {
    if store.current_user().is_none() {
        store.get_profile().await;
    }
    let Some(client) = store.authed_client() else {
        return Ok(None);
    };
    match client.my_profile().await {
        Ok(profile) => Ok(Some(profile)),
        Err(e) if store.handle_error(&e) => Ok(None),
        Err(e) => {
            tracing::warn!("Could not load profile: {}", e);
            Err(e.to_string())
        }
    }
}

/// What a profile-backed page can show.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ProfileState {
    Loading,
    /// The fetch settled without a user to show.
    Unavailable(String),
    Ready {
        user: api::User,
        profile: Option<api::UserProfile>,
        error: Option<String>,
    },
}

impl ProfileState {
    pub(crate) fn new(user: Option<api::User>, fetched: Option<ProfileFetch>) -> Self {
        match (user, fetched) {
            (_, None) => Self::Loading,
            (None, Some(Err(message))) => Self::Unavailable(message),
            (None, Some(Ok(_))) => Self::Unavailable(ACCOUNT_UNAVAILABLE.to_string()),
            (Some(user), Some(Ok(profile))) => Self::Ready { user, profile, error: None },
            (Some(user), Some(Err(message))) => Self::Ready {
                user,
                profile: None,
                error: Some(message),
            },
        }
    }
}
