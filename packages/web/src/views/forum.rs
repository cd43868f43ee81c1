use api::ToastKind;
use dioxus::prelude::*;
use ui::{show_toast, use_session, use_toasts};

#[derive(Debug, Clone, PartialEq)]
struct Post {
    id: u32,
    author: String,
    title: String,
    body: String,
    replies: u32,
}

fn seed_posts() -> Vec<Post> {
    let post = |id, author: &str, title: &str, body: &str, replies| Post {
        id,
        author: author.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        replies,
    };
    vec![
        post(2, "Priya Raman", "How I prepared for data science interviews", "A list of what worked and what did not.", 14),
        post(1, "Tom Walsh", "Is a summer internship worth delaying graduation?", "Curious what alumni think.", 6),
    ]
}

/// Draft a new post. Both title and body are required.
fn compose(existing: &[Post], author: &str, title: &str, body: &str) -> Option<Post> {
    let (title, body) = (title.trim(), body.trim());
    if title.is_empty() || body.is_empty() {
        return None;
    }
    let id = existing.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    Some(Post {
        id,
        author: author.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        replies: 0,
    })
}

#[component]
pub fn Forum() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let author = session
        .read()
        .current_user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or_default();

    let mut posts = use_signal(seed_posts);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let post = compose(&posts.read(), &author, &title.read(), &body.read());
        match post {
            Some(post) => {
                posts.write().insert(0, post);
                title.set(String::new());
                body.set(String::new());
                show_toast(&mut toasts, ToastKind::Success, "Post published");
            }
            None => show_toast(&mut toasts, ToastKind::Error, "Please add a title and a message"),
        }
    };

    rsx! {
        section { class: "page",
            h1 { "Community forum" }
            form { class: "form card", onsubmit: on_submit,
                input {
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
                textarea {
                    placeholder: "What would you like to ask or share?",
                    rows: "4",
                    value: "{body}",
                    oninput: move |e| body.set(e.value()),
                }
                button { class: "button button--primary", r#type: "submit", "Post" }
            }
            for post in posts() {
                article { key: "{post.id}", class: "card post",
                    h3 { "{post.title}" }
                    p { "{post.body}" }
                    p { class: "muted", "{post.author} · {post.replies} replies" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_assigns_next_id() {
        let posts = seed_posts();
        let post = compose(&posts, "Ada", " Hello ", "First post").unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.replies, 0);
    }

    #[test]
    fn test_compose_requires_title_and_body() {
        assert!(compose(&[], "Ada", "", "body").is_none());
        assert!(compose(&[], "Ada", "title", "  ").is_none());
        assert_eq!(compose(&[], "Ada", "t", "b").map(|p| p.id), Some(1));
    }
}
