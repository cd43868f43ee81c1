use dioxus::prelude::*;
use ui::icons::{FaCalendar, FaComments, FaHandshake, FaRobot};
use ui::{use_session, Icon};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let greeting = session
        .read()
        .current_user
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.display_name()));

    rsx! {
        section { class: "hero",
            h1 { "Connect students with the alumni who walked the path before them" }
            p { class: "muted",
                "Find a mentor, ask questions in the forum, join events and keep track of your own progress."
            }
            if let Some(greeting) = greeting {
                p { class: "hero-greeting", "{greeting}" }
                Link { class: "button button--primary", to: Route::Dashboard {}, "Go to dashboard" }
            } else {
                div { class: "hero-actions",
                    Link { class: "button button--primary", to: Route::Register {}, "Get started" }
                    Link { class: "button", to: Route::Login {}, "I already have an account" }
                }
            }
        }

        section { class: "feature-grid",
            div { class: "feature",
                Icon { icon: FaHandshake, width: 24, height: 24 }
                h3 { "Mentorship" }
                p { "Students request guidance; alumni share what they learned." }
            }
            div { class: "feature",
                Icon { icon: FaComments, width: 24, height: 24 }
                h3 { "Forum" }
                p { "Ask the community about courses, careers and interviews." }
            }
            div { class: "feature",
                Icon { icon: FaCalendar, width: 24, height: 24 }
                h3 { "Events" }
                p { "Meetups, webinars and reunions in one calendar." }
            }
            div { class: "feature",
                Icon { icon: FaRobot, width: 24, height: 24 }
                h3 { "Assistant" }
                p { "An AI assistant that answers questions any time of day." }
            }
        }
    }
}
