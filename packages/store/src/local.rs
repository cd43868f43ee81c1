//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the web platform. Entries
//! live in `window.localStorage`, so they survive reloads and browser
//! restarts until the session is cleared.
//!
//! Like the other stores it never reports errors: a missing window, a
//! disabled storage area (private browsing) or a quota error all degrade to
//! "nothing stored".

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write of {key}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not removed");
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("localStorage rejected removal of {key}");
        }
    }
}
