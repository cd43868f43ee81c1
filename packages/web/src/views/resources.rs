use api::Role;
use dioxus::prelude::*;
use ui::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audience {
    Everyone,
    Students,
    Alumni,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Resource {
    title: &'static str,
    category: &'static str,
    summary: &'static str,
    audience: Audience,
}

const RESOURCES: &[Resource] = &[
    Resource { title: "Writing a CV that gets read", category: "Careers", summary: "A one-page template with annotated examples.", audience: Audience::Students },
    Resource { title: "Preparing for technical interviews", category: "Careers", summary: "Practice plan and common question patterns.", audience: Audience::Students },
    Resource { title: "Mentoring 101", category: "Mentoring", summary: "How to run a first session and set goals together.", audience: Audience::Alumni },
    Resource { title: "Giving useful feedback", category: "Mentoring", summary: "Short guide to honest and kind feedback.", audience: Audience::Alumni },
    Resource { title: "Scholarships and grants", category: "Funding", summary: "Current funding opportunities for enrolled students.", audience: Audience::Students },
    Resource { title: "Community guidelines", category: "Platform", summary: "What is expected of everyone on MentorLink.", audience: Audience::Everyone },
];

fn visible_for(role: Option<Role>, category: Option<&str>) -> Vec<Resource> {
    RESOURCES
        .iter()
        .filter(|r| match (role, r.audience) {
            (_, Audience::Everyone) | (Some(Role::Admin), _) => true,
            (Some(Role::Alumni), audience) => audience == Audience::Alumni,
            (_, audience) => audience == Audience::Students,
        })
        .filter(|r| category.is_none_or(|c| r.category == c))
        .copied()
        .collect()
}

#[component]
pub fn Resources() -> Element {
    let session = use_session();
    let role = session.read().current_user.as_ref().map(|u| u.role);
    let mut category = use_signal(|| Option::<&'static str>::None);

    let mut categories: Vec<&'static str> = visible_for(role, None).iter().map(|r| r.category).collect();
    categories.dedup();
    let items = visible_for(role, category());

    rsx! {
        section { class: "page",
            h1 { "Resources" }
            div { class: "filters",
                button {
                    class: if category().is_none() { "chip active" } else { "chip" },
                    onclick: move |_| category.set(None),
                    "All"
                }
                for c in categories {
                    button {
                        key: "{c}",
                        class: if category() == Some(c) { "chip active" } else { "chip" },
                        onclick: move |_| category.set(Some(c)),
                        "{c}"
                    }
                }
            }
            div { class: "card-grid",
                for item in items {
                    div { key: "{item.title}", class: "card",
                        span { class: "tag", "{item.category}" }
                        h3 { "{item.title}" }
                        p { class: "muted", "{item.summary}" }
                    }
                }
            }
        }
    }
}
