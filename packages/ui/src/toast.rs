//! Toast notifications.
//!
//! [`ToastProvider`] owns a [`ToastQueue`] signal and renders it in a fixed
//! corner. A single ticker task expires toasts after [`TOAST_SECONDS`], so a
//! toast raised by a page outlives that page.

use std::time::Duration;

use api::{Notifier, ToastKind};
use dioxus::prelude::*;

use crate::timing::sleep;

pub const TOAST_SECONDS: u64 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    expires_at: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    tick: u64,
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            expires_at: self.tick + TOAST_SECONDS,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Advance one second and drop expired toasts.
    pub fn tick(&mut self) {
        self.tick += 1;
        let now = self.tick;
        self.toasts.retain(|t| t.expires_at > now);
    }
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Push a toast onto the queue.
pub fn show_toast(queue: &mut Signal<ToastQueue>, kind: ToastKind, message: &str) {
    queue.write().push(kind, message);
}

/// [`Notifier`] that feeds the session store's messages into the toast queue.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    queue: Signal<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        let mut queue = self.queue;
        show_toast(&mut queue, kind, message);
    }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut queue = use_context_provider(|| Signal::new(ToastQueue::default()));

    use_future(move || async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            if !queue.peek().toasts.is_empty() {
                queue.write().tick();
            }
        }
    });

    let toasts = queue().toasts;

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Info => "toast toast--info",
                    },
                    role: "status",
                    span { "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| queue.write().dismiss(toast.id),
                        "\u{00D7}"
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
    fn test_toasts_expire_after_ticks() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "saved");
        for _ in 0..TOAST_SECONDS - 1 {
            queue.tick();
        }
        assert_eq!(queue.toasts.len(), 1);
        queue.tick();
        assert!(queue.toasts.is_empty());
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "one");
        queue.push(ToastKind::Error, "two");
        queue.dismiss(first);
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "two");
    }
}
