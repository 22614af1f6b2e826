//! Well-known storage keys shared by the API client, the session store and
//! the access gate.

/// Bearer credential attached to every API request.
pub const TOKEN: &str = "token";

/// Beta-access flag written after a successful login, registration or
/// invite redemption. Only [`BETA_ACCESS_GRANTED`] means granted.
pub const BETA_ACCESS: &str = "ep_beta_access";

/// Sentinel value stored under [`BETA_ACCESS`].
pub const BETA_ACCESS_GRANTED: &str = "true";

/// Namespace key of the persisted session blob `{token, user, isAuthenticated}`.
pub const AUTH_STORAGE: &str = "ep-auth-storage";
