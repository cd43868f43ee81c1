use dioxus::prelude::*;
use ui::{navigation_for, use_session, NavIconView};

#[component]
pub fn Dashboard() -> Element {
    // The session provider refreshes the user once on startup.
    let session = use_session();
    let nav = use_navigator();

    let user = session.read().current_user.clone();
    let role = user.as_ref().map(|u| u.role);
    let name = user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "there".to_string());
    let role_label = role.map(|r| r.label()).unwrap_or("Member");
    let links: Vec<_> = navigation_for(role)
        .into_iter()
        .filter(|item| item.path != "/dashboard")
        .collect();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "Hello, {name}" }
                span { class: "badge", "{role_label}" }
            }
            p { class: "muted", "Here is where you can pick up where you left off." }

            div { class: "card-grid",
                for item in links {
                    button {
                        key: "{item.path}",
                        class: "card card--link",
                        onclick: move |_| {
                            nav.push(item.path);
                        },
                        NavIconView { icon: item.icon }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}
