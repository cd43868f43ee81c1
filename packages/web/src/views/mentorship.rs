//! Mentorship directory.
//!
//! Students browse alumni mentors and send requests, alumni answer requests
//! from students, admins see every pairing. The catalogue is static for now
//! and all interaction state is local to the page.

use api::{Role, ToastKind};
use dioxus::prelude::*;
use ui::{show_toast, use_session, use_toasts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Open,
    Pending,
    Active,
    Declined,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Open => "Open",
            Status::Pending => "Pending",
            Status::Active => "Active",
            Status::Declined => "Declined",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: u32,
    name: &'static str,
    headline: &'static str,
    tags: &'static [&'static str],
    status: Status,
}

fn mentors() -> Vec<Entry> {
    vec![
        Entry { id: 1, name: "Amara Okafor", headline: "Software Engineer, class of 2016", tags: &["Backend", "Career switch"], status: Status::Open },
        Entry { id: 2, name: "Lukas Brenner", headline: "Product Manager, class of 2012", tags: &["Product", "Interviews"], status: Status::Open },
        Entry { id: 3, name: "Priya Raman", headline: "Data Scientist, class of 2018", tags: &["Machine learning", "Research"], status: Status::Open },
        Entry { id: 4, name: "Diego Alvarez", headline: "Founder, class of 2010", tags: &["Startups", "Fundraising"], status: Status::Open },
    ]
}

fn mentee_requests() -> Vec<Entry> {
    vec![
        Entry { id: 11, name: "Hana Kim", headline: "Computer Science, year 3", tags: &["Internships"], status: Status::Pending },
        Entry { id: 12, name: "Tom Walsh", headline: "Economics, year 2", tags: &["Finance", "CV review"], status: Status::Pending },
        Entry { id: 13, name: "Sara Nilsson", headline: "Design, year 4", tags: &["Portfolio"], status: Status::Active },
    ]
}

fn all_pairings() -> Vec<Entry> {
    vec![
        Entry { id: 21, name: "Hana Kim & Amara Okafor", headline: "Started in March", tags: &["Backend"], status: Status::Active },
        Entry { id: 22, name: "Tom Walsh & Lukas Brenner", headline: "Requested last week", tags: &["Product"], status: Status::Pending },
        Entry { id: 23, name: "Sara Nilsson & Diego Alvarez", headline: "Ended by mentor", tags: &["Startups"], status: Status::Declined },
    ]
}

fn catalogue_for(role: Option<Role>) -> Vec<Entry> {
    match role {
        Some(Role::Alumni) => mentee_requests(),
        Some(Role::Admin) => all_pairings(),
        _ => mentors(),
    }
}

fn matches(entry: &Entry, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || entry.name.to_lowercase().contains(&query)
        || entry.headline.to_lowercase().contains(&query)
        || entry.tags.iter().any(|t| t.to_lowercase().contains(&query))
}

#[component]
pub fn Mentorship() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let role = session.read().current_user.as_ref().map(|u| u.role);

    let mut entries = use_signal(|| catalogue_for(role));
    let mut query = use_signal(String::new);

    let mut set_status = move |id: u32, status: Status, message: &str| {
        if let Some(entry) = entries.write().iter_mut().find(|e| e.id == id) {
            entry.status = status;
        }
        show_toast(&mut toasts, ToastKind::Success, message);
    };

    let (title, subtitle) = match role {
        Some(Role::Alumni) => ("My Mentees", "Students who asked for your guidance."),
        Some(Role::Admin) => ("Mentorships", "Every mentorship on the platform."),
        _ => ("Find a Mentor", "Alumni who volunteered to help."),
    };
    let visible: Vec<Entry> = entries
        .read()
        .iter()
        .filter(|e| matches(e, &query.read()))
        .cloned()
        .collect();

    rsx! {
        section { class: "page",
            h1 { "{title}" }
            p { class: "muted", "{subtitle}" }
            input {
                class: "search",
                placeholder: "Search by name or topic",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            if visible.is_empty() {
                p { class: "muted", "Nothing matches your search." }
            }
            div { class: "card-grid",
                for entry in visible {
                    div { key: "{entry.id}", class: "card",
                        h3 { "{entry.name}" }
                        p { class: "muted", "{entry.headline}" }
                        div { class: "tags",
                            for tag in entry.tags.iter() {
                                span { class: "tag", "{tag}" }
                            }
                        }
                        span { class: "badge", "{entry.status}" }
                        {match (role, entry.status) {
                            (Some(Role::Alumni), Status::Pending) => rsx! {
                                div { class: "card-actions",
                                    button {
                                        class: "button button--primary",
                                        onclick: move |_| set_status(entry.id, Status::Active, "Mentorship accepted"),
                                        "Accept"
                                    }
                                    button {
                                        class: "button",
                                        onclick: move |_| set_status(entry.id, Status::Declined, "Request declined"),
                                        "Decline"
                                    }
                                }
                            },
                            (Some(Role::Alumni) | Some(Role::Admin), _) => rsx! {},
                            (_, Status::Open) => rsx! {
                                button {
                                    class: "button button--primary",
                                    onclick: move |_| set_status(entry.id, Status::Pending, "Mentorship request sent"),
                                    "Request mentorship"
                                }
                            },
                            _ => rsx! {},
                        }}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_depends_on_role() {
        assert!(catalogue_for(Some(Role::Student)).iter().all(|e| e.status == Status::Open));
        assert!(catalogue_for(Some(Role::Alumni)).iter().any(|e| e.status == Status::Pending));
        assert_eq!(catalogue_for(None), mentors());
    }

    #[test]
    fn test_search_matches_tags_case_insensitively() {
        let entries = mentors();
        let hits: Vec<_> = entries.iter().filter(|e| matches(e, "machine")).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Priya Raman");
        assert_eq!(entries.iter().filter(|e| matches(e, "  ")).count(), entries.len());
    }
}
