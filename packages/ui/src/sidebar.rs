use api::User;
use dioxus::prelude::*;

use crate::auth::use_session_store;
use crate::navigation::{navigation_for, NavIconView};
use crate::icons::FaRightFromBracket;
use crate::Icon;

#[component]
pub fn AppSidebar(
    user: Option<User>,
    active_path: String,
    on_navigate: EventHandler<String>,
) -> Element {
    let store = use_session_store();
    let items = navigation_for(user.as_ref().map(|u| u.role));

    rsx! {
        aside {
            class: "sidebar",

            // User header
            div {
                class: "sidebar-user",
                if let Some(ref u) = user {
                    span { class: "sidebar-avatar", "{u.initials()}" }
                    div {
                        class: "sidebar-user-text",
                        span { class: "sidebar-user-name", "{u.display_name()}" }
                        span { class: "sidebar-user-role", "{u.role.label()}" }
                    }
                } else {
                    span { class: "sidebar-user-name", "MentorLink" }
                }
            }

            nav {
                class: "sidebar-nav",
                for entry in items {
                    button {
                        key: "{entry.path}",
                        class: if active_path == entry.path { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(entry.path.to_string()),
                        NavIconView { icon: entry.icon }
                        span { "{entry.label}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-item",
                    onclick: move |_| store.logout(),
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    span { "Log out" }
                }
            }
        }
    }
}
