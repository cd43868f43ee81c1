use api::{ProgressReport, Role};
use dioxus::prelude::*;
use ui::icons::{FaCircle, FaCircleCheck};
use ui::{use_session, use_session_store, Icon};

use super::{load_profile, AccountUnavailable, ProfileState};

#[component]
pub fn Progress() -> Element {
    let store = use_session_store();
    let session = use_session();

    let mut profile = use_resource(move || {
        let store = store.clone();
        async move { load_profile(&store).await }
    });

    let user = session.read().current_user.clone();
    let state = ProfileState::new(user, profile.read().as_ref().cloned());
    let (user, report, error) = match state {
        ProfileState::Loading => return rsx! { p { class: "muted", "Loading progress..." } },
        ProfileState::Unavailable(message) => {
            return rsx! {
                AccountUnavailable { message: message, on_retry: move |_| profile.restart() }
            };
        }
        ProfileState::Ready { user, profile, error } => {
            let report = ProgressReport::from_profile(&user, profile.as_ref());
            (user, report, error)
        }
    };
    let title = if user.role == Role::Admin { "Platform Progress" } else { "My Progress" };
    let percent = report.percent();
    let summary = format!("{} of {} steps done", report.completed(), report.total());
    let next = report.next_steps().first().copied();

    rsx! {
        section { class: "page narrow",
            h1 { "{title}" }
            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }
            div { class: "progress",
                div { class: "progress-bar", style: "width: {percent}%;" }
            }
            p { class: "muted", "{percent}% complete · {summary}" }
            if let Some(step) = next {
                p { "Next up: {step}" }
            }
            ul { class: "milestones",
                for milestone in report.milestones {
                    li { class: if milestone.done { "milestone done" } else { "milestone" },
                        if milestone.done {
                            Icon { icon: FaCircleCheck, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaCircle, width: 14, height: 14 }
                        }
                        span { "{milestone.label}" }
                    }
                }
            }
        }
    }
}
