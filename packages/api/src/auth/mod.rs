//! Authentication: the session state machine and OAuth connect redirects.

mod connect;
mod session;

pub use connect::connect_url;
pub use session::{PersistedSession, Session, SessionStore};
