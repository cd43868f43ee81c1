//! AI assistant chat.

use api::{ChatbotClient, Conversation};
use dioxus::prelude::*;
use ui::icons::FaPaperPlane;
use ui::{use_config, ChatBubble, Icon};

#[component]
pub fn Chatbot() -> Element {
    let config = use_config();
    let client = use_hook(|| ChatbotClient::new(&config.chatbot));
    let mut conversation = use_signal(Conversation::new);
    let mut input = use_signal(String::new);
    let model = client.model().to_string();

    let mut ask = move || {
        let Some(prompt) = conversation.write().begin(&input.read()) else {
            return;
        };
        input.set(String::new());
        let client = client.clone();
        spawn(async move {
            let reply = client.generate(&prompt).await;
            conversation.write().finish(reply);
        });
    };

    let loading = conversation.read().is_loading();
    let messages = conversation.read().messages().to_vec();

    rsx! {
        section { class: "page chat",
            header { class: "page-header",
                h1 { "Assistant" }
                span { class: "muted", "Model: {model}" }
                button {
                    class: "button",
                    disabled: loading,
                    onclick: move |_| conversation.write().clear(),
                    "New chat"
                }
            }
            div { class: "chat-log",
                for (i, message) in messages.into_iter().enumerate() {
                    ChatBubble { key: "{i}", message: message }
                }
                if loading {
                    div { class: "chat-typing", "Thinking..." }
                }
            }
            form {
                class: "compose",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    ask();
                },
                input {
                    placeholder: "Ask about courses, careers or the platform",
                    value: "{input}",
                    disabled: loading,
                    oninput: move |e| input.set(e.value()),
                }
                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: loading,
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                }
            }
        }
    }
}
