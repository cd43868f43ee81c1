//! Account registration for students and alumni.

use api::RegisterInput;
use dioxus::prelude::*;
use ui::{use_session, use_session_store};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let store = use_session_store();
    let session = use_session();
    let nav = use_navigator();

    let mut form = use_signal(|| RegisterInput {
        role: "STUDENT".to_string(),
        ..RegisterInput::default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let loading = session.read().is_loading;
    let RegisterInput {
        email,
        password,
        first_name,
        last_name,
        role,
        graduation_year,
    } = form();
    let is_alumni = role == "ALUMNI";

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            error.set(None);
            let input = form();
            match store.register(&input).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        h1 { "Create your account" }
        p { class: "muted", "Join as a student looking for guidance or as an alumnus ready to give back." }

        form { class: "form", onsubmit: on_submit,
            div { class: "form-row",
                div {
                    label { r#for: "first-name", "First name" }
                    input {
                        id: "first-name",
                        value: "{first_name}",
                        oninput: move |e| form.write().first_name = e.value(),
                    }
                }
                div {
                    label { r#for: "last-name", "Last name" }
                    input {
                        id: "last-name",
                        value: "{last_name}",
                        oninput: move |e| form.write().last_name = e.value(),
                    }
                }
            }
            label { r#for: "email", "Email" }
            input {
                id: "email",
                r#type: "email",
                autocomplete: "email",
                value: "{email}",
                oninput: move |e| form.write().email = e.value(),
            }
            label { r#for: "password", "Password" }
            input {
                id: "password",
                r#type: "password",
                autocomplete: "new-password",
                value: "{password}",
                oninput: move |e| form.write().password = e.value(),
            }
            label { r#for: "role", "I am a" }
            select {
                id: "role",
                value: "{role}",
                onchange: move |e| form.write().role = e.value(),
                option { value: "STUDENT", "Student" }
                option { value: "ALUMNI", "Alumnus / Alumna" }
            }
            if is_alumni {
                label { r#for: "graduation-year", "Graduation year" }
                input {
                    id: "graduation-year",
                    r#type: "number",
                    min: "1950",
                    max: "2100",
                    value: "{graduation_year}",
                    oninput: move |e| form.write().graduation_year = e.value(),
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            button {
                class: "button button--primary",
                r#type: "submit",
                disabled: loading,
                if loading { "Creating account..." } else { "Sign up" }
            }
        }

        div { class: "auth-links",
            span {
                "Already registered? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
