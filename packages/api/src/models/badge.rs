//! # Rank Guard badges (Pawn Pass)
//!
//! A badge is a server-signed credential asserting the holder's EP Score at
//! issuance. The client never edits one: it generates, lists and revokes.
//! [`GeneratedBadge::payload`] is kept as raw JSON so the exported credential
//! carries exactly the bytes-equivalent object the server signed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A badge as listed by `GET /api/badges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub badge_token: String,
    pub trust_score: u32,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub signature: Option<String>,
}

/// Response of `GET /api/badges`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BadgesResponse {
    #[serde(default)]
    pub badges: Vec<Badge>,
}

/// A freshly generated badge with its signed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBadge {
    pub badge_token: String,
    pub payload: Value,
    pub signature: String,
    pub expires_at: DateTime<Utc>,
}

impl GeneratedBadge {
    /// Typed view of the payload's known claims.
    pub fn claims(&self) -> BadgePayload {
        serde_json::from_value(self.payload.clone()).unwrap_or_default()
    }

    /// Score snapshot carried by the payload.
    pub fn trust_score(&self) -> Option<u32> {
        self.claims().trust_score
    }
}

/// Known claims of a badge payload. Every field is optional; unknown claims
/// are ignored here and preserved in [`GeneratedBadge::payload`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BadgePayload {
    #[serde(default)]
    pub sub: Option<Value>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub trust_score: Option<u32>,
    #[serde(default)]
    pub badge_token: Option<String>,
}

/// Response of `POST /api/badges/generate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateBadgeResponse {
    pub badge: GeneratedBadge,
}

/// Body of `POST /api/badges/revoke`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevokeBadgeRequest {
    pub badge_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_badge_claims() {
        let resp: GenerateBadgeResponse = serde_json::from_value(json!({
            "badge": {
                "badge_token": "tok_123",
                "payload": {"sub": 7, "iss": "enpassant", "trust_score": 55, "badge_token": "tok_123"},
                "signature": "sig",
                "expires_at": "2026-10-26T12:00:00Z"
            }
        }))
        .unwrap();
        let claims = resp.badge.claims();
        assert_eq!(claims.trust_score, Some(55));
        assert_eq!(claims.iss.as_deref(), Some("enpassant"));
        assert_eq!(resp.badge.trust_score(), Some(55));
    }

    #[test]
    fn test_payload_without_claims() {
        let badge = GeneratedBadge {
            badge_token: "t".into(),
            payload: json!("opaque"),
            signature: "s".into(),
            expires_at: Utc::now(),
        };
        assert_eq!(badge.trust_score(), None);
    }

    #[test]
    fn test_revoke_request_omits_missing_reason() {
        let body = RevokeBadgeRequest { badge_token: "t".into(), reason: None };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"badge_token": "t"}));
    }
}
