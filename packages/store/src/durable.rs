//! Typed accessors over a [`KeyValueStore`] for the keys in [`crate::keys`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::keys;
use crate::KeyValueStore;

/// Wraps a [`KeyValueStore`] with the client's well-known keys.
#[derive(Clone, Debug, Default)]
pub struct Durable<S> {
    store: S,
}

impl<S: KeyValueStore> Durable<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(keys::TOKEN).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(keys::TOKEN, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(keys::TOKEN);
    }

    /// True only when the flag holds the exact `"true"` sentinel.
    pub fn beta_access(&self) -> bool {
        self.store.get(keys::BETA_ACCESS).as_deref() == Some(keys::BETA_ACCESS_GRANTED)
    }

    pub fn grant_beta_access(&self) {
        self.store.set(keys::BETA_ACCESS, keys::BETA_ACCESS_GRANTED);
    }

    pub fn clear_beta_access(&self) {
        self.store.remove(keys::BETA_ACCESS);
    }

    /// Read a JSON value. A malformed entry is dropped and reads as `None`.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding malformed {} entry: {}", key, e);
                self.store.remove(key);
                None
            }
        }
    }

    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set(key, &raw),
            Err(e) => tracing::warn!("Failed to serialize {}: {}", key, e),
        }
    }

    pub fn remove(&self, key: &str) {
        self.store.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        token: Option<String>,
        count: u32,
    }

    #[test]
    fn test_token_accessors() {
        let durable = Durable::new(MemoryStore::new());
        assert!(durable.token().is_none());

        durable.set_token("tok_1");
        assert_eq!(durable.token().as_deref(), Some("tok_1"));

        // An empty token is treated as absent
        durable.set_token("");
        assert!(durable.token().is_none());

        durable.clear_token();
        assert!(durable.inner().get(keys::TOKEN).is_none());
    }

    #[test]
    fn test_beta_flag_requires_sentinel() {
        let store = MemoryStore::new();
        let durable = Durable::new(store.clone());
        assert!(!durable.beta_access());

        store.set(keys::BETA_ACCESS, "yes");
        assert!(!durable.beta_access());

        durable.grant_beta_access();
        assert!(durable.beta_access());
        assert_eq!(store.get(keys::BETA_ACCESS).as_deref(), Some("true"));

        durable.clear_beta_access();
        assert!(!durable.beta_access());
    }

    #[test]
    fn test_json_roundtrip_and_malformed_entry() {
        let store = MemoryStore::new();
        let durable = Durable::new(store.clone());

        let blob = Blob { token: Some("t".into()), count: 2 };
        durable.save_json(keys::AUTH_STORAGE, &blob);
        assert_eq!(durable.load_json::<Blob>(keys::AUTH_STORAGE), Some(blob));

        store.set(keys::AUTH_STORAGE, "{not json");
        assert_eq!(durable.load_json::<Blob>(keys::AUTH_STORAGE), None);
        // The malformed entry is dropped
        assert!(store.get(keys::AUTH_STORAGE).is_none());
    }
}
