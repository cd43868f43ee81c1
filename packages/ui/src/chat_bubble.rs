use api::{ChatAuthor, ChatMessage};
use dioxus::prelude::*;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Relative URLs and `http`, `https` or `mailto` links are kept.
///
/// Browsers ignore whitespace and control characters inside a scheme, so
/// those are stripped before the scheme is read.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => SAFE_SCHEMES.contains(&&cleaned[..i]),
        _ => true,
    }
}

fn neutralize(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        tracing::warn!("Dropped unsafe link target in chat reply");
        CowStr::Borrowed("#")
    }
}

/// Render assistant markdown to HTML. Raw HTML in the source is shown as
/// text, and link or image targets with an unsafe scheme become `#`.
pub fn markdown_to_html(source: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn ChatBubble(message: ChatMessage) -> Element {
    match message.author {
        ChatAuthor::User => rsx! {
            div {
                class: "chat-bubble chat-bubble--user",
                "{message.content}"
            }
        },
        ChatAuthor::Bot => rsx! {
            div {
                class: "chat-bubble chat-bubble--bot",
                dangerous_inner_html: markdown_to_html(&message.content),
            }
        },
        ChatAuthor::Error => rsx! {
            div {
                class: "chat-bubble chat-bubble--error",
                role: "alert",
                "{message.content}"
            }
        },
    }
}
