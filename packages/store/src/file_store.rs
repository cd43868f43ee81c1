//! # Filesystem-backed key/value store
//!
//! [`FileStore`] persists entries as a single TOML table so native builds keep
//! the session across restarts the same way a browser keeps `localStorage`.
//!
//! ```text
//! <base_dir>/
//! └── session.toml     # token = "..."  refreshToken = "..."
//! ```
//!
//! The whole file is rewritten on every change. Unreadable or corrupt files
//! behave like an empty store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::kv::KeyValueStore;

const FILE_NAME: &str = "session.toml";

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(self.path())
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) {
        let body = match toml::to_string(entries) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to encode {}: {}", FILE_NAME, e);
                return;
            }
        };
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.path(), body) {
            tracing::warn!("Failed to write {}: {}", self.path().display(), e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries);
        }
    }
}
