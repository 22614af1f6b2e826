//! # Beta access gate
//!
//! Decides, for the current path and session, whether the page renders
//! normally, shows a loading state, or renders blurred under the invite
//! overlay. The decision is a pure function so every rule is testable without
//! a UI; `ui::AccessGate` only gathers the inputs.
//!
//! Authenticated users are decided by the server's beta status. The durable
//! `ep_beta_access` flag is a cache consulted while that fetch is in flight or
//! failed. Anonymous visitors have no server status, so the flag alone decides
//! unless [`GatePolicy::trust_anonymous_flag`] is turned off.

use store::ClientConfig;

use crate::models::{normalize_code, BetaStatus, InviteCodeError};

/// Paths that never require beta access.
pub const EXEMPT_PATHS: [&str; 6] = ["/login", "/register", "/join", "/auth/error", "/privacy", "/terms"];

/// Prefix of public badge verification pages.
pub const VERIFY_PREFIX: &str = "/verify/";

pub fn is_exempt(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    EXEMPT_PATHS.contains(&trimmed) || path.starts_with(VERIFY_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePolicy {
    pub trust_anonymous_flag: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            trust_anonymous_flag: true,
        }
    }
}

impl From<&ClientConfig> for GatePolicy {
    fn from(config: &ClientConfig) -> Self {
        Self {
            trust_anonymous_flag: config.gate.trust_anonymous_flag,
        }
    }
}

/// What the server said about beta access for the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerStatus {
    /// Not fetched yet, or a fetch is in flight.
    Pending,
    Loaded(BetaStatus),
    /// The fetch failed; fall back to the local flag.
    Failed,
}

/// Everything the gate looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct GateInput<'a> {
    pub path: &'a str,
    pub session_pending: bool,
    pub authenticated: bool,
    pub local_flag: bool,
    pub server: ServerStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Loading,
    /// Render children blurred and inert under the invite overlay.
    Blur,
}

pub fn decide(input: &GateInput<'_>, policy: GatePolicy) -> GateDecision {
    if is_exempt(input.path) {
        return GateDecision::Render;
    }
    if input.session_pending {
        return GateDecision::Loading;
    }

    let granted = if input.authenticated {
        match &input.server {
            ServerStatus::Loaded(status) => status.has_beta_access,
            // Show the cached grant while the server answer is outstanding
            ServerStatus::Pending if input.local_flag => true,
            ServerStatus::Pending => return GateDecision::Loading,
            ServerStatus::Failed => input.local_flag,
        }
    } else {
        policy.trust_anonymous_flag && input.local_flag
    };

    if granted {
        GateDecision::Render
    } else {
        GateDecision::Blur
    }
}

/// What submitting the invite overlay should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
    /// Anonymous visitor: carry the code to registration. No API call.
    RedirectToRegister(String),
    /// Signed-in user: redeem the normalised code.
    Redeem(String),
}

pub fn overlay_action(authenticated: bool, input: &str) -> Result<OverlayAction, InviteCodeError> {
    let code = normalize_code(input)?;
    Ok(if authenticated {
        OverlayAction::Redeem(code)
    } else {
        OverlayAction::RedirectToRegister(register_url(&code))
    })
}

/// `/register?code=<CODE>`.
pub fn register_url(code: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(code.as_bytes()).collect();
    format!("/register?code={}", encoded)
}
