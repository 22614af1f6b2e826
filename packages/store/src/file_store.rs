//! # Filesystem-backed key/value store
//!
//! [`FileStore`] persists each key as a small file under a base directory.
//! It is used by native builds (`dx serve --platform desktop`, tests against
//! a real directory) to keep the session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token             # bearer credential
//! ├── ep_beta_access    # "true" when beta access was granted
//! └── ep-auth-storage   # persisted session blob (JSON)
//! ```
//!
//! Use [`dirs::data_dir()`] joined with `enpassant` as the base on desktop.
//! I/O errors are swallowed: an unreadable file reads as a missing key, matching
//! the browser storage contract.

use std::path::PathBuf;

use crate::KeyValueStore;

/// Filesystem-backed store for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create store directory {:?}: {}", self.base, e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to write key {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("enpassant_store_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set(keys::TOKEN, "tok_abc");
        store.set(keys::BETA_ACCESS, keys::BETA_ACCESS_GRANTED);

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get(keys::TOKEN).as_deref(), Some("tok_abc"));
        assert_eq!(reopened.get(keys::BETA_ACCESS).as_deref(), Some("true"));

        reopened.remove(keys::TOKEN);
        assert!(store.get(keys::TOKEN).is_none());

        // Removing a missing key is a no-op
        reopened.remove(keys::TOKEN);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
