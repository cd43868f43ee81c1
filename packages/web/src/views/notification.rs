use api::Role;
use dioxus::prelude::*;
use ui::use_session;

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    id: u32,
    text: &'static str,
    when: &'static str,
    read: bool,
}

fn notices_for(role: Option<Role>) -> Vec<Notice> {
    let mut notices = vec![
        Notice { id: 1, text: "Welcome to MentorLink! Complete your profile to get better matches.", when: "Today", read: false },
        Notice { id: 2, text: "Spring networking night registration is open.", when: "Yesterday", read: false },
    ];
    match role {
        Some(Role::Alumni) => notices.push(Notice { id: 3, text: "Hana Kim asked you to be their mentor.", when: "2 days ago", read: false }),
        Some(Role::Admin) => notices.push(Notice { id: 3, text: "Two new accounts are waiting for verification.", when: "2 days ago", read: false }),
        _ => notices.push(Notice { id: 3, text: "Amara Okafor replied to your message.", when: "2 days ago", read: true }),
    }
    notices
}

fn unread(notices: &[Notice]) -> usize {
    notices.iter().filter(|n| !n.read).count()
}

#[component]
pub fn Notification() -> Element {
    let session = use_session();
    let role = session.read().current_user.as_ref().map(|u| u.role);
    let mut notices = use_signal(|| notices_for(role));
    let count = unread(&notices.read());

    rsx! {
        section { class: "page narrow",
            header { class: "page-header",
                h1 { "Notifications" }
                span { class: "badge", "{count} unread" }
                button {
                    class: "button",
                    disabled: count == 0,
                    onclick: move |_| {
                        for n in notices.write().iter_mut() {
                            n.read = true;
                        }
                    },
                    "Mark all as read"
                }
            }
            ul { class: "notice-list",
                for notice in notices() {
                    li {
                        key: "{notice.id}",
                        class: if notice.read { "notice" } else { "notice unread" },
                        onclick: move |_| {
                            if let Some(n) = notices.write().iter_mut().find(|n| n.id == notice.id) {
                                n.read = true;
                            }
                        },
                        p { "{notice.text}" }
                        span { class: "muted", "{notice.when}" }
                    }
                }
            }
        }
    }
}
