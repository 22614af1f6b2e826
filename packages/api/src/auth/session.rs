//! # Session store: the client's authentication state machine
//!
//! [`SessionStore`] is the explicit application context for "who is signed
//! in". It is created once at startup, handed to every component that needs
//! it (cloning shares the same state), and is the only writer of [`Session`].
//! Components read immutable [`Session`] snapshots and subscribe for changes.
//!
//! ## States
//!
//! ```text
//!   anonymous ──register/login/initialize ok──▶ authenticated
//!   authenticated ──logout / 401 from any call──▶ anonymous
//! ```
//!
//! `is_loading` is set while `register`, `login` or `initialize` is in flight
//! and cleared on both success and failure. Route guards also wait for
//! `initialized`, so nothing is decided before the stored token was checked.
//!
//! ## Durable state
//!
//! | Key | Written by | Cleared by |
//! |-----|-----------|-----------|
//! | `token` | register, login | logout, 401, failed initialize |
//! | `ep_beta_access` | register (granted), login (`has_beta_access`), beta status, redemption | logout, 401, failed initialize, beta status denial |
//! | `ep-auth-storage` | every authenticated transition | logout, 401, failed initialize |
//!
//! `beta_access` itself is never persisted; it is re-fetched on every load.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use store::{keys, Durable, KeyValueStore};

use crate::auth::connect_url;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{BetaStatus, Provider, User};
use crate::transport::Transport;

/// Snapshot of the current actor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub beta_access: BetaStatus,
    pub is_loading: bool,
    /// Set once `initialize` has completed.
    pub initialized: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether routing decisions must wait.
    pub fn is_pending(&self) -> bool {
        !self.initialized || self.is_loading
    }

    fn signed_out() -> Self {
        Self {
            initialized: true,
            ..Self::default()
        }
    }
}

/// The persisted subset of [`Session`], stored under `ep-auth-storage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

type Listener = Rc<dyn Fn(&Session)>;
type ExpiredHook = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct SessionStore<T, S> {
    client: ApiClient<T, S>,
    state: Rc<RefCell<Session>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    expired_hooks: Rc<RefCell<Vec<ExpiredHook>>>,
}

impl<T, S> SessionStore<T, S>
where
    T: Transport + Clone + 'static,
    S: KeyValueStore + Clone + 'static,
{
    /// Wrap `client` and subscribe to its 401 invalidations.
    pub fn new(client: ApiClient<T, S>) -> Self {
        let store = Self {
            client,
            state: Rc::new(RefCell::new(Session::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
            expired_hooks: Rc::new(RefCell::new(Vec::new())),
        };

        let on_401 = store.clone();
        store.client.on_unauthorized(move || on_401.expire());
        store
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    fn storage(&self) -> &Durable<S> {
        self.client.storage()
    }

    /// Current state.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Called with the new snapshot after every state change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Called once when an authenticated session is invalidated by a 401.
    pub fn on_expired(&self, hook: impl Fn() + 'static) {
        self.expired_hooks.borrow_mut().push(Rc::new(hook));
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        f(&mut self.state.borrow_mut());
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self.listeners.borrow().iter().cloned().collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn persist(&self) {
        let state = self.state.borrow();
        let blob = PersistedSession {
            token: state.token.clone(),
            user: state.user.clone(),
            is_authenticated: state.is_authenticated(),
        };
        drop(state);
        self.storage().save_json(keys::AUTH_STORAGE, &blob);
    }

    fn clear_durable(&self) {
        let storage = self.storage();
        storage.clear_token();
        storage.clear_beta_access();
        storage.remove(keys::AUTH_STORAGE);
    }

    /// Create an account. With a valid `invite_code` the server may grant beta
    /// access immediately, which is mirrored into the durable flag.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        invite_code: Option<&str>,
    ) -> Result<User, ApiError> {
        self.update(|s| s.is_loading = true);
        let resp = match self.client.auth().register(email, password, invite_code).await {
            Ok(resp) => resp,
            Err(e) => {
                self.update(|s| s.is_loading = false);
                return Err(e);
            }
        };

        self.storage().set_token(&resp.token);
        let grant = resp.beta_access.filter(|g| g.granted);
        if grant.is_some() {
            self.storage().grant_beta_access();
        }

        let user = resp.user.clone();
        self.update(|s| {
            s.token = Some(resp.token);
            s.user = Some(resp.user);
            s.beta_access = match grant {
                Some(g) => BetaStatus::granted(Some(g.invite_codes)),
                None => BetaStatus::default(),
            };
            s.is_loading = false;
            s.initialized = true;
        });
        self.persist();
        tracing::info!("Registered {}", user.email);
        Ok(user)
    }

    /// Sign in. `user.has_beta_access` is promoted into the durable flag.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.update(|s| s.is_loading = true);
        let resp = match self.client.auth().login(email, password).await {
            Ok(resp) => resp,
            Err(e) => {
                self.update(|s| s.is_loading = false);
                return Err(e);
            }
        };

        self.storage().set_token(&resp.token);
        let has_beta = resp.user.has_beta_access;
        if has_beta {
            self.storage().grant_beta_access();
        }

        let user = resp.user.clone();
        self.update(|s| {
            s.token = Some(resp.token);
            s.user = Some(resp.user);
            s.beta_access = BetaStatus {
                has_beta_access: has_beta,
                ..BetaStatus::default()
            };
            s.is_loading = false;
            s.initialized = true;
        });
        self.persist();
        tracing::info!("Signed in as {}", user.email);
        Ok(user)
    }

    /// Clear the token, the beta flag and every session field.
    pub fn logout(&self) {
        self.clear_durable();
        self.update(|s| *s = Session::signed_out());
    }

    // 401 path. The client already removed the token.
    fn expire(&self) {
        let was_active = {
            let state = self.state.borrow();
            state.token.is_some() || state.user.is_some()
        };
        self.logout();
        if was_active {
            tracing::warn!("Session expired");
            let hooks: Vec<ExpiredHook> = self.expired_hooks.borrow().iter().cloned().collect();
            for hook in hooks {
                hook();
            }
        }
    }

    /// Restore the session on startup.
    ///
    /// With a stored token the persisted profile is shown immediately and then
    /// confirmed against `/api/user/me`; any failure signs out. Without one the
    /// session starts anonymous.
    pub async fn initialize(&self) {
        let Some(token) = self.storage().token() else {
            self.storage().remove(keys::AUTH_STORAGE);
            self.update(|s| *s = Session::signed_out());
            return;
        };

        let persisted: Option<PersistedSession> = self.storage().load_json(keys::AUTH_STORAGE);
        self.update(|s| {
            s.is_loading = true;
            s.token = Some(token.clone());
            s.user = persisted.and_then(|p| p.user);
        });

        match self.client.user().me().await {
            Ok(user) => {
                self.update(|s| {
                    s.user = Some(user);
                    s.is_loading = false;
                    s.initialized = true;
                });
                self.persist();
            }
            Err(e) => {
                tracing::info!("Stored session rejected: {}", e);
                self.logout();
            }
        }
    }

    /// OAuth connect URL for Gmail. Requires a signed-in session.
    pub fn connect_google(&self) -> Result<String, ApiError> {
        self.connect(Provider::Gmail)
    }

    /// OAuth connect URL for LinkedIn. Requires a signed-in session.
    pub fn connect_linkedin(&self) -> Result<String, ApiError> {
        self.connect(Provider::LinkedIn)
    }

    /// Full-page redirect target for `provider`, token in the query string.
    pub fn connect(&self, provider: Provider) -> Result<String, ApiError> {
        let token = self
            .storage()
            .token()
            .ok_or_else(|| ApiError::client("Please sign in before connecting an account"))?;
        connect_url(self.client.base_url(), provider, &token)
    }

    /// Refresh `beta_access` from the server, the source of truth for
    /// authenticated users. The durable flag follows the answer.
    pub async fn fetch_beta_status(&self) -> Result<BetaStatus, ApiError> {
        let status = self.client.invites().beta_status().await?;
        if status.has_beta_access {
            self.storage().grant_beta_access();
        } else {
            self.storage().clear_beta_access();
        }
        let result = status.clone();
        self.update(|s| s.beta_access = status);
        Ok(result)
    }

    /// Redeem an invite code for the signed-in user. A transport failure or a
    /// `success: false` answer is returned as an error for the caller to show.
    pub async fn redeem_invite_code(&self, code: &str) -> Result<BetaStatus, ApiError> {
        let resp = self.client.invites().redeem(code).await?;
        if !resp.success {
            let message = resp.error.clone().or_else(|| resp.message.clone());
            let data = serde_json::json!({ "success": false, "error": message });
            return Err(ApiError::rejected(200, message, data));
        }

        self.storage().grant_beta_access();
        let status = BetaStatus::granted(resp.invite_codes);
        let result = status.clone();
        self.update(|s| s.beta_access = status);
        Ok(result)
    }
}
