//! Page frames.
//!
//! Public pages get a top bar. Login, register and forgot-password sit inside
//! it and are guest only. Everything else is an app page with the sidebar and
//! requires a session.

use dioxus::prelude::*;
use ui::{public_navigation, use_session, AppSidebar, GuestOnly, RequireAuth};

use crate::Route;

#[component]
pub fn PublicLayout() -> Element {
    let session = use_session();
    let authenticated = session.read().is_authenticated();

    rsx! {
        div { class: "public-shell",
            header { class: "topbar",
                Link { class: "brand", to: Route::Home {}, "MentorLink" }
                nav { class: "topbar-links",
                    for item in public_navigation() {
                        Link { key: "{item.path}", to: item.path, "{item.label}" }
                    }
                    if authenticated {
                        Link { class: "button button--primary", to: Route::Dashboard {}, "Dashboard" }
                    } else {
                        Link { to: Route::Login {}, "Log in" }
                        Link { class: "button button--primary", to: Route::Register {}, "Sign up" }
                    }
                }
            }
            main { class: "public-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn AuthLayout() -> Element {
    rsx! {
        GuestOnly {
            div { class: "auth-card",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        RequireAuth {
            AppShell {}
        }
    }
}

#[component]
fn AppShell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let active_path = route.to_string();
    let user = session.read().current_user.clone();

    let on_navigate = move |path: String| {
        nav.push(path);
    };

    rsx! {
        div { class: "app-shell",
            AppSidebar {
                user: user,
                active_path: active_path,
                on_navigate: on_navigate,
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
