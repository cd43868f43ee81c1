use api::validation::validate_support;
use api::{SupportRequest, ToastKind};
use dioxus::prelude::*;

use crate::auth::use_session_store;
use crate::toast::{show_toast, use_toasts};

/// Value a field should take when its prefill changes: only an empty field
/// is filled, so nothing the user typed is overwritten.
fn prefill(current: &str, incoming: &str) -> Option<String> {
    (current.is_empty() && !incoming.trim().is_empty()).then(|| incoming.to_string())
}

/// Support/contact form posting to `/api/auth/support`.
///
/// Keeps the user's input when sending fails so they can retry.
#[component]
pub fn ContactForm(
    #[props(default)] first_name: String,
    #[props(default)] email: String,
) -> Element {
    let store = use_session_store();
    let mut toasts = use_toasts();
    let mut name_input = use_signal(|| first_name.clone());
    let mut email_input = use_signal(|| email.clone());

    // The signed-in user may only arrive after the form has mounted.
    use_effect(use_reactive((&first_name, &email), move |(first_name, email)| {
        let name = prefill(&name_input.peek(), &first_name);
        if let Some(value) = name {
            name_input.set(value);
        }
        let address = prefill(&email_input.peek(), &email);
        if let Some(value) = address {
            email_input.set(value);
        }
    }));
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = store.client().clone();
        spawn(async move {
            error.set(None);
            let request = SupportRequest {
                first_name: name_input(),
                email: email_input(),
                subject: subject(),
                message: message(),
            };
            let request = match validate_support(&request) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            sending.set(true);
            match client.send_support(&request).await {
                Ok(resp) if resp.success => {
                    let text = resp
                        .message
                        .unwrap_or_else(|| "Thanks! We'll get back to you soon.".to_string());
                    show_toast(&mut toasts, ToastKind::Success, &text);
                    subject.set(String::new());
                    message.set(String::new());
                }
                Ok(resp) => {
                    let text = resp.message.unwrap_or_else(|| "Message could not be sent".to_string());
                    show_toast(&mut toasts, ToastKind::Error, &text);
                }
                Err(e) => {
                    tracing::warn!("Support request failed: {}", e.detail());
                    show_toast(&mut toasts, ToastKind::Error, &e.to_string());
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        form {
            class: "form contact-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            input {
                class: "input",
                r#type: "text",
                placeholder: "First name",
                value: name_input(),
                oninput: move |evt: FormEvent| name_input.set(evt.value()),
            }
            input {
                class: "input",
                r#type: "email",
                placeholder: "Email",
                value: email_input(),
                oninput: move |evt: FormEvent| email_input.set(evt.value()),
            }
            input {
                class: "input",
                r#type: "text",
                placeholder: "Subject",
                value: subject(),
                oninput: move |evt: FormEvent| subject.set(evt.value()),
            }
            textarea {
                class: "input",
                rows: "5",
                placeholder: "How can we help?",
                value: message(),
                oninput: move |evt: FormEvent| message.set(evt.value()),
            }
            button {
                class: "button button--primary",
                r#type: "submit",
                disabled: sending(),
                if sending() { "Sending..." } else { "Send message" }
            }
        }
    }
}
