use api::UserProfile;
use dioxus::prelude::*;
use ui::{use_session, use_session_store};

use super::{load_profile, AccountUnavailable, ProfileState};
use crate::Route;

fn or_dash(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[component]
pub fn Profile() -> Element {
    let store = use_session_store();
    let session = use_session();

    let mut profile = use_resource(move || {
        let store = store.clone();
        async move { load_profile(&store).await }
    });

    let user = session.read().current_user.clone();
    let state = ProfileState::new(user, profile.read().as_ref().cloned());
    let (user, details) = match state {
        ProfileState::Loading => return rsx! { p { class: "muted", "Loading profile..." } },
        ProfileState::Unavailable(message) => {
            return rsx! {
                AccountUnavailable { message: message, on_retry: move |_| profile.restart() }
            };
        }
        ProfileState::Ready { user, profile: Some(p), .. } => {
            (user, rsx! { ProfileDetails { profile: p } })
        }
        ProfileState::Ready { user, error: Some(message), .. } => {
            (user, rsx! { p { class: "form-error", "{message}" } })
        }
        ProfileState::Ready { user, .. } => (user, rsx! {}),
    };

    let initials = user.initials();
    let name = user.display_name();
    let role = user.role.label();

    rsx! {
        section { class: "page narrow",
            header { class: "profile-header",
                div { class: "avatar large", "{initials}" }
                div {
                    h1 { "{name}" }
                    p { class: "muted", "{user.email}" }
                    span { class: "badge", "{role}" }
                }
            }
            {details}
            Link { class: "button", to: Route::Progress {}, "See profile progress" }
        }
    }
}

#[component]
fn ProfileDetails(profile: UserProfile) -> Element {
    let year = profile
        .graduation_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    let rows = [
        ("Headline", or_dash(&profile.headline)),
        ("Bio", or_dash(&profile.bio)),
        ("Location", or_dash(&profile.location)),
        ("Major", or_dash(&profile.major)),
        ("Graduation year", year),
        ("Company", or_dash(&profile.company)),
        ("Job title", or_dash(&profile.job_title)),
        ("Skills", profile.skills.join(", ")),
        ("Interests", profile.interests.join(", ")),
        ("LinkedIn", or_dash(&profile.linkedin_url)),
        ("GitHub", or_dash(&profile.github_url)),
    ];

    rsx! {
        dl { class: "profile-fields",
            for (label, value) in rows {
                dt { "{label}" }
                dd { "{value}" }
            }
        }
    }
}
