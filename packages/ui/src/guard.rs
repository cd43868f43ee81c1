//! Route guards.
//!
//! Two rules, both evaluated on every render so a session change takes effect
//! immediately:
//!
//! - [`protected`]: app pages need a session, otherwise go to `/login`.
//! - [`guest_only`]: login/register pages with a session go to `/dashboard`.
//!
//! Redirects replace the current history entry, so Back never returns to the
//! page that was refused.

use dioxus::prelude::*;

use crate::auth::use_session;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

pub fn protected(is_authenticated: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

pub fn guest_only(is_authenticated: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::Redirect(DASHBOARD_PATH)
    } else {
        GuardDecision::Allow
    }
}

fn apply(decision: GuardDecision, nav: Navigator, children: Element) -> Element {
    match decision {
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Redirect(to) => {
            tracing::debug!("Guard redirect to {}", to);
            nav.replace(to);
            rsx! {}
        }
    }
}

/// Renders `children` only with an authenticated session.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let decision = protected(session.read().is_authenticated());
    apply(decision, nav, children)
}

/// Renders `children` only without a session.
#[component]
pub fn GuestOnly(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let decision = guest_only(session.read().is_authenticated());
    apply(decision, nav, children)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use api::Session;
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    thread_local! {
        static SIGNED_IN: Cell<bool> = const { Cell::new(false) };
        static SECRET_RENDERED: Cell<bool> = const { Cell::new(false) };
    }

    #[derive(Debug, Clone, Routable, PartialEq)]
    #[rustfmt::skip]
    enum TestRoute {
        #[layout(Guarded)]
            #[route("/")]
            Secret {},
        #[end_layout]
        #[route("/login")]
        LoginPage {},
    }

    #[component]
    fn Guarded() -> Element {
        rsx! {
            RequireAuth {
                Outlet::<TestRoute> {}
            }
        }
    }

    #[component]
    fn Secret() -> Element {
        SECRET_RENDERED.with(|r| r.set(true));
        rsx! { "secret" }
    }

    #[component]
    fn LoginPage() -> Element {
        rsx! { "login" }
    }

    fn app() -> Element {
        use_context_provider(|| {
            let mut session = Session::default();
            if SIGNED_IN.with(Cell::get) {
                session.access_token = Some("t1".into());
            }
            Signal::new(session)
        });
        rsx! { Router::<TestRoute> {} }
    }

    fn renders_secret(signed_in: bool) -> bool {
        SIGNED_IN.with(|s| s.set(signed_in));
        SECRET_RENDERED.with(|r| r.set(false));
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        SECRET_RENDERED.with(Cell::get)
    }

    #[test]
    fn test_require_auth_hides_child_without_session() {
        assert!(!renders_secret(false));
    }

    #[test]
    fn test_require_auth_renders_child_with_session() {
        assert!(renders_secret(true));
    }

    #[test]
    fn test_protected_redirects_to_login() {
        assert_eq!(protected(false), GuardDecision::Redirect("/login"));
        assert_eq!(protected(true), GuardDecision::Allow);
    }

    #[test]
    fn test_guest_only_redirects_to_dashboard() {
        assert_eq!(guest_only(true), GuardDecision::Redirect("/dashboard"));
        assert_eq!(guest_only(false), GuardDecision::Allow);
    }

    #[test]
    fn test_rules_are_inverse() {
        for authed in [true, false] {
            let allowed_app = protected(authed) == GuardDecision::Allow;
            let allowed_auth = guest_only(authed) == GuardDecision::Allow;
            assert_ne!(allowed_app, allowed_auth);
        }
    }
}
