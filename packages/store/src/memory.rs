use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::KeyValueStore;

/// In-memory store for tests and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(keys::TOKEN).is_none());

        store.set(keys::TOKEN, "abc");
        assert_eq!(store.get(keys::TOKEN).as_deref(), Some("abc"));

        // Last write wins
        store.set(keys::TOKEN, "def");
        assert_eq!(store.get(keys::TOKEN).as_deref(), Some("def"));

        store.remove(keys::TOKEN);
        assert!(store.get(keys::TOKEN).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set(keys::BETA_ACCESS, keys::BETA_ACCESS_GRANTED);
        assert_eq!(other.get(keys::BETA_ACCESS).as_deref(), Some("true"));
    }
}
