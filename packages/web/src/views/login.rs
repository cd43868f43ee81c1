//! Email/password login.

use api::Credentials;
use dioxus::prelude::*;
use ui::{use_session, use_session_store};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let store = use_session_store();
    let session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let loading = session.read().is_loading;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            error.set(None);
            let credentials = Credentials::new(email(), password());
            match store.login(&credentials).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        h1 { "Welcome back" }
        p { class: "muted", "Log in to continue to MentorLink." }

        form { class: "form", onsubmit: on_submit,
            label { r#for: "email", "Email" }
            input {
                id: "email",
                r#type: "email",
                autocomplete: "email",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            label { r#for: "password", "Password" }
            input {
                id: "password",
                r#type: "password",
                autocomplete: "current-password",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            button {
                class: "button button--primary",
                r#type: "submit",
                disabled: loading,
                if loading { "Logging in..." } else { "Log in" }
            }
        }

        div { class: "auth-links",
            Link { to: Route::ForgotPassword {}, "Forgot password?" }
            span {
                "No account yet? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
