use dioxus::prelude::*;
use ui::use_session;

#[derive(Debug, Clone, PartialEq)]
struct Message {
    from_me: bool,
    body: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Thread {
    id: u32,
    with: &'static str,
    messages: Vec<Message>,
}

fn incoming(body: &str) -> Message {
    Message { from_me: false, body: body.to_string() }
}

fn seed_threads() -> Vec<Thread> {
    vec![
        Thread {
            id: 1,
            with: "Amara Okafor",
            messages: vec![incoming("Happy to look at your CV before Friday.")],
        },
        Thread {
            id: 2,
            with: "Career Office",
            messages: vec![incoming("The spring networking night is now open for sign-ups.")],
        },
        Thread { id: 3, with: "Lukas Brenner", messages: Vec::new() },
    ]
}

/// Append `body` to the thread with `id`. Blank messages are dropped.
fn send(threads: &mut [Thread], id: u32, body: &str) -> bool {
    let body = body.trim();
    if body.is_empty() {
        return false;
    }
    match threads.iter_mut().find(|t| t.id == id) {
        Some(thread) => {
            thread.messages.push(Message { from_me: true, body: body.to_string() });
            true
        }
        None => false,
    }
}

#[component]
pub fn Messages() -> Element {
    let session = use_session();
    let me = session
        .read()
        .current_user
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_else(|| "You".to_string());

    let mut threads = use_signal(seed_threads);
    let mut selected = use_signal(|| 1u32);
    let mut draft = use_signal(String::new);

    let current = threads.read().iter().find(|t| t.id == selected()).cloned();
    let list: Vec<(u32, &'static str, String)> = threads
        .read()
        .iter()
        .map(|t| {
            let preview = t.messages.last().map(|m| m.body.clone()).unwrap_or_default();
            (t.id, t.with, preview)
        })
        .collect();

    let mut submit = move || {
        if send(&mut threads.write(), selected(), &draft.read()) {
            draft.set(String::new());
        }
    };

    rsx! {
        section { class: "page messages",
            aside { class: "thread-list",
                for (id, with, preview) in list {
                    button {
                        key: "{id}",
                        class: if id == selected() { "thread active" } else { "thread" },
                        onclick: move |_| selected.set(id),
                        strong { "{with}" }
                        span { class: "muted", "{preview}" }
                    }
                }
            }
            div { class: "thread-view",
                if let Some(thread) = current {
                    h2 { "{thread.with}" }
                    div { class: "thread-messages",
                        if thread.messages.is_empty() {
                            p { class: "muted", "No messages yet. Say hello!" }
                        }
                        for message in thread.messages.iter() {
                            div { class: if message.from_me { "bubble mine" } else { "bubble" },
                                span { class: "bubble-author",
                                    if message.from_me { "{me}" } else { "{thread.with}" }
                                }
                                p { "{message.body}" }
                            }
                        }
                    }
                    form {
                        class: "compose",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            submit();
                        },
                        input {
                            placeholder: "Write a message",
                            value: "{draft}",
                            oninput: move |e| draft.set(e.value()),
                        }
                        button { class: "button button--primary", r#type: "submit", "Send" }
                    }
                }
            }
        }
    }
}
