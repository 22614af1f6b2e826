//! # Users and authentication responses
//!
//! [`User`] is deliberately loose: the client reads `email` and
//! `has_beta_access` and keeps every other field the server sends in `extra`,
//! so the persisted session round-trips the profile unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::invite::IssuedCode;

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub has_beta_access: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            has_beta_access: false,
            extra: Map::new(),
        }
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.extra
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// True when the address is on an academic (`.edu`) domain.
    pub fn has_edu_email(&self) -> bool {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain.to_ascii_lowercase().ends_with(".edu"))
            .unwrap_or(false)
    }
}

/// Beta access granted as part of registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaGrant {
    #[serde(default)]
    pub granted: bool,
    #[serde(default)]
    pub invite_codes: Vec<IssuedCode>,
}

/// Response of `/api/auth/register` and `/api/auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub beta_access: Option<BetaGrant>,
}

/// Response of `/api/user/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeResponse {
    pub user: User,
}
