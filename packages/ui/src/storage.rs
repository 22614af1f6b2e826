//! Platform storage and client constructors.
//!
//! Returns the [`store::KeyValueStore`] the session lives in:
//! - **Web** (WASM + `web` feature): the browser's `localStorage`
//! - **Native**: one file per key under `<data_dir>/enpassant/`

use api::{ApiClient, ClientConfig, HttpTransport, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

pub type AppClient = ApiClient<HttpTransport, PlatformStore>;
pub type AppSession = SessionStore<HttpTransport, PlatformStore>;

/// Create the platform-appropriate durable store.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("enpassant");
        store::FileStore::new(base)
    }
}

/// Build the session store (and its API client) for `config`.
pub fn make_session(config: &ClientConfig) -> AppSession {
    let client = ApiClient::new(&config.api.base_url, HttpTransport::new(), make_store());
    SessionStore::new(client)
}
