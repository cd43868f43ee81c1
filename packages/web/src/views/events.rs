use api::ToastKind;
use dioxus::prelude::*;
use ui::{show_toast, use_toasts};

#[derive(Debug, Clone, PartialEq)]
struct Meetup {
    id: u32,
    title: &'static str,
    date: &'static str,
    location: &'static str,
    attending: bool,
}

fn upcoming() -> Vec<Meetup> {
    vec![
        Meetup { id: 1, title: "Spring networking night", date: "April 18, 18:00", location: "Main hall", attending: false },
        Meetup { id: 2, title: "Breaking into product management", date: "April 24, 12:30", location: "Online", attending: false },
        Meetup { id: 3, title: "Class of 2015 reunion", date: "May 9, 19:00", location: "Alumni house", attending: false },
    ]
}

/// Flip attendance for `id` and return the new state.
fn toggle(events: &mut [Meetup], id: u32) -> Option<bool> {
    let event = events.iter_mut().find(|e| e.id == id)?;
    event.attending = !event.attending;
    Some(event.attending)
}

#[component]
pub fn Events() -> Element {
    let mut toasts = use_toasts();
    let mut events = use_signal(upcoming);

    let mut rsvp = move |id: u32| {
        let attending = toggle(&mut events.write(), id);
        match attending {
            Some(true) => show_toast(&mut toasts, ToastKind::Success, "You're on the list"),
            Some(false) => show_toast(&mut toasts, ToastKind::Info, "RSVP cancelled"),
            None => tracing::warn!("RSVP for unknown event {}", id),
        }
    };

    rsx! {
        section { class: "page",
            h1 { "Upcoming events" }
            div { class: "card-grid",
                for event in events() {
                    div { key: "{event.id}", class: "card",
                        h3 { "{event.title}" }
                        p { class: "muted", "{event.date} · {event.location}" }
                        button {
                            class: if event.attending { "button" } else { "button button--primary" },
                            onclick: move |_| rsvp(event.id),
                            if event.attending { "Cancel RSVP" } else { "RSVP" }
                        }
                    }
                }
            }
        }
    }
}
