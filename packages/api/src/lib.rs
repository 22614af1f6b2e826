//! # API crate: the En Passant client core
//!
//! Everything the frontend needs that is not rendering: the HTTP client and
//! its transport, typed request/response schemas, the session state machine
//! and the pure rules behind the access gate, the credential export and the
//! face-value check. Nothing here depends on Dioxus, so every rule is unit
//! tested against an in-memory transport and [`store::MemoryStore`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | `Transport` trait and the `reqwest` implementation |
//! | [`client`] | `ApiClient`: base URL, bearer token, error mapping, global 401 handling |
//! | [`endpoints`] | One sub-client per backend area (`auth()`, `badges()`, `invites()`, ...) |
//! | [`models`] | Response and request schemas, EP Score breakdown, invite-code format |
//! | [`auth`] | `SessionStore` and OAuth connect URLs |
//! | [`gate`] | Beta access decision and invite overlay routing |
//! | [`credential`] | Rank Guard export payload and expiry labels |
//! | [`pricing`] | Face-value price parsing and advisory cap check |
//! | [`config`] | `enpassant.toml` loading with environment overrides |

pub mod auth;
pub mod client;
pub mod config;
pub mod credential;
pub mod endpoints;
pub mod error;
pub mod gate;
pub mod models;
pub mod pricing;
pub mod transport;

pub use auth::{connect_url, PersistedSession, Session, SessionStore};
pub use client::ApiClient;
pub use error::{ApiError, ErrorKind};
pub use store::ClientConfig;
pub use transport::{HttpTransport, Transport};
