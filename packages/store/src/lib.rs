//! Durable client-side storage for the En Passant client.
//!
//! Everything the client keeps across reloads goes through [`KeyValueStore`]:
//! the bearer token, the beta-access flag and the persisted session blob.
//! The same trait is backed by an in-memory map (tests), plain files
//! (native builds) and the browser's `localStorage` (web).

pub mod config;
pub mod keys;

mod durable;
pub use durable::Durable;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::ClientConfig;

/// Synchronous string key/value storage.
///
/// Mirrors the browser storage contract: reads never fail (a missing or
/// unreadable key is `None`) and writes are last-write-wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
