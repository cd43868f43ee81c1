use std::time::Duration;

use api::validation::validate_email;
use api::ToastKind;
use dioxus::prelude::*;
use ui::{show_toast, sleep, use_toasts};

use crate::Route;

/// Password reset request. There is no reset endpoint yet, so submitting only
/// waits briefly and confirms.
#[component]
pub fn ForgotPassword() -> Element {
    let mut toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut sent = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        if let Err(e) = validate_email(email.read().trim()) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        sending.set(true);
        spawn(async move {
            sleep(Duration::from_millis(1500)).await;
            sending.set(false);
            sent.set(true);
            show_toast(
                &mut toasts,
                ToastKind::Info,
                "If that address is registered, a reset link is on its way",
            );
        });
    };

    rsx! {
        h1 { "Reset your password" }
        if sent() {
            p { "Check your inbox for a link to choose a new password." }
        } else {
            p { class: "muted", "Enter the email you signed up with." }
            form { class: "form", onsubmit: on_submit,
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Send reset link" }
                }
            }
        }
        div { class: "auth-links",
            Link { to: Route::Login {}, "Back to login" }
        }
    }
}
