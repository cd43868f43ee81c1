//! Token persistence under the two fixed storage keys.

use crate::kv::KeyValueStore;

/// Storage key for the bearer (access) token.
pub const ACCESS_TOKEN_KEY: &str = "token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The pair of tokens as held in durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTokens {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

impl StoredTokens {
    pub fn new(access: impl Into<String>, refresh: Option<String>) -> Self {
        Self {
            access: non_empty(Some(access.into())),
            refresh: non_empty(refresh),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Reads and writes [`StoredTokens`] through any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> StoredTokens {
        StoredTokens {
            access: non_empty(self.storage.get(ACCESS_TOKEN_KEY)),
            refresh: non_empty(self.storage.get(REFRESH_TOKEN_KEY)),
        }
    }

    /// Persist both tokens; an absent (or empty) token removes its key.
    pub fn save(&self, tokens: &StoredTokens) {
        self.write(ACCESS_TOKEN_KEY, tokens.access.as_deref());
        self.write(REFRESH_TOKEN_KEY, tokens.refresh.as_deref());
    }

    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn write(&self, key: &str, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() => self.storage.set(key, v),
            _ => self.storage.remove(key),
        }
    }
}
