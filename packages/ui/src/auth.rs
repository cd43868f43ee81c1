//! Session context and hooks for the UI.

use std::rc::Rc;

use api::{ClientConfig, HttpClient, Notifier, Session, SessionStore};
use dioxus::prelude::*;

use crate::toast::{use_toasts, ToastNotifier};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStore;

/// The session store as used by the app on this platform.
pub type AppSession = SessionStore<PlatformStorage>;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_storage() -> PlatformStorage {
    store::LocalStore::new()
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn platform_storage() -> PlatformStorage {
    store::MemoryStore::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mentorlink")
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_storage() -> PlatformStorage {
    store::FileStore::new(data_dir())
}

/// Client configuration for this platform.
///
/// Native builds read `mentorlink.toml` next to the session file; the browser
/// build uses defaults plus build-time overrides.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_config() -> ClientConfig {
    ClientConfig::load_from(&data_dir())
}

#[cfg(target_arch = "wasm32")]
pub fn platform_config() -> ClientConfig {
    ClientConfig::load()
}

/// Current session state. Re-renders the caller whenever the session changes.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The store itself, for login/register/logout and authenticated calls.
pub fn use_session_store() -> AppSession {
    use_context::<AppSession>()
}

/// Client configuration provided by [`SessionProvider`].
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that owns the session store.
///
/// Must sit inside a [`crate::ToastProvider`]. Refreshes the current user once
/// on mount when a token was restored from storage.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let toasts = use_toasts();
    let config = use_context_provider(|| config);

    let store: AppSession = use_hook(|| {
        let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(toasts));
        SessionStore::new(HttpClient::from_config(&config), platform_storage(), notifier)
    });
    let session = use_context_provider(|| Signal::new(store.snapshot()));

    use_hook(|| {
        store.subscribe(move |next: &Session| {
            let mut session = session;
            session.set(next.clone());
        });
    });
    use_context_provider(|| store.clone());

    let refresher = store.clone();
    use_future(move || {
        let store = refresher.clone();
        async move {
            store.get_profile().await;
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// The route guards take care of leaving any protected page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let store = use_session_store();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| store.logout(),
            "{label}"
        }
    }
}
