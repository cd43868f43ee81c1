//! Durable client-side storage for the session tokens.
//!
//! Everything goes through the synchronous [`KeyValueStore`] trait so that a
//! storage write and the matching in-memory update happen inside one session
//! operation. [`TokenStore`] layers the two fixed token keys on top.

pub mod kv;
pub mod tokens;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::KeyValueStore;
pub use tokens::{StoredTokens, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
