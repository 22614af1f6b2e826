//! # Credential export and display helpers
//!
//! Pure functions behind the Rank Guard panel. The exported credential is what
//! a user hands to a verifier, so it is built from the server's response
//! fields and nothing else; display truncation never leaks into it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::GeneratedBadge;

const SECONDS_PER_DAY: i64 = 86_400;

/// The object copied to the clipboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialExport {
    pub badge_token: String,
    pub payload: Value,
    pub signature: String,
}

impl CredentialExport {
    pub fn from_badge(badge: &GeneratedBadge) -> Self {
        Self {
            badge_token: badge.badge_token.clone(),
            payload: badge.payload.clone(),
            signature: badge.signature.clone(),
        }
    }

    /// Pretty-printed JSON, payload keys in server order.
    pub fn to_clipboard_text(&self) -> String {
        // A struct of String and Value cannot fail to serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// The badge's validity window has closed.
pub fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expires_at < now
}

pub fn is_expired_now(expires_at: DateTime<Utc>) -> bool {
    is_expired(expires_at, Utc::now())
}

/// Countdown label for a badge's expiry, in whole days rounded down.
pub fn expiry_label(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if is_expired(expires_at, now) {
        return "Expired".to_string();
    }
    let seconds = (expires_at - now).num_seconds();
    match seconds.div_euclid(SECONDS_PER_DAY) {
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("Expires in {} days", d),
    }
}

/// [`expiry_label`] against the current clock.
pub fn expiry_label_from_now(expires_at: DateTime<Utc>) -> String {
    expiry_label(expires_at, Utc::now())
}

/// Shorten a badge token for display: first and last `keep` characters.
pub fn truncate_token(token: &str, keep: usize) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= keep * 2 + 3 {
        return token.to_string();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Copy shown before a badge is generated.
pub fn generate_prompt(trust_score: u32) -> String {
    format!(
        "Generate a Pawn Pass that certifies your EP Score of {} for the next 7 days.",
        trust_score
    )
}

/// Result lines shown after generation.
pub fn preview_lines(badge: &GeneratedBadge) -> Vec<(&'static str, String)> {
    let mut lines = vec![("badge_token", truncate_token(&badge.badge_token, 8))];
    if let Some(score) = badge.trust_score() {
        lines.push(("trust_score", score.to_string()));
    }
    lines.push((
        "expires_at",
        badge.expires_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    ));
    lines
}

/// `key: value` rendering of [`preview_lines`].
pub fn format_preview(badge: &GeneratedBadge) -> Vec<String> {
    preview_lines(badge)
        .into_iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn badge() -> GeneratedBadge {
        let body = r#"{
            "badge_token": "bt_4f9c2a7e81d3b6aa90",
            "payload": {"sub": 42, "iss": "enpassant.example", "trust_score": 55, "badge_token": "bt_4f9c2a7e81d3b6aa90"},
            "signature": "MEUCIQDx",
            "expires_at": "2026-10-26T12:00:00Z"
        }"#;
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_export_matches_server_fields_exactly() {
        let badge = badge();
        let text = CredentialExport::from_badge(&badge).to_clipboard_text();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["badge_token"], json!(badge.badge_token));
        assert_eq!(parsed["payload"], badge.payload);
        assert_eq!(parsed["signature"], json!("MEUCIQDx"));
        assert_eq!(parsed.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_export_keeps_payload_key_order() {
        let text = CredentialExport::from_badge(&badge()).to_clipboard_text();
        let order: Vec<usize> = ["\"sub\"", "\"iss\"", "\"trust_score\"", "\"badge_token\": \"bt_4f9c2a7e81d3b6aa90\"\n"]
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(text.starts_with("{\n  \"badge_token\""));
    }

    #[test]
    fn test_export_ignores_display_truncation() {
        let badge = badge();
        let text = CredentialExport::from_badge(&badge).to_clipboard_text();
        assert!(text.contains("bt_4f9c2a7e81d3b6aa90"));
        assert!(!text.contains("..."));
    }

    #[test]
    fn test_expiry_label_boundaries() {
        let now = now();
        assert_eq!(expiry_label(now - Duration::seconds(1), now), "Expired");
        assert_eq!(expiry_label(now - Duration::days(3), now), "Expired");
        assert_eq!(expiry_label(now, now), "Expires today");
        assert_eq!(expiry_label(now + Duration::hours(23), now), "Expires today");
        assert_eq!(expiry_label(now + Duration::hours(24), now), "Expires tomorrow");
        assert_eq!(expiry_label(now + Duration::hours(47), now), "Expires tomorrow");
        assert_eq!(expiry_label(now + Duration::hours(48), now), "Expires in 2 days");
        assert_eq!(expiry_label(now + Duration::days(7), now), "Expires in 7 days");
    }

    #[test]
    fn test_is_expired_agrees_with_label() {
        let now = now();
        for offset in [
            Duration::milliseconds(-500),
            Duration::seconds(-1),
            Duration::zero(),
            Duration::milliseconds(500),
            Duration::days(2),
        ] {
            let expires_at = now + offset;
            assert_eq!(
                is_expired(expires_at, now),
                expiry_label(expires_at, now) == "Expired",
                "{offset}"
            );
        }
        assert!(is_expired(now - Duration::milliseconds(500), now));
        assert!(!is_expired(now, now));
    }

    #[test]
    fn test_truncate_token() {
        assert_eq!(truncate_token("bt_4f9c2a7e81d3b6aa90", 4), "bt_4...aa90");
        assert_eq!(truncate_token("short", 4), "short");
    }

    #[test]
    fn test_score_55_preview() {
        assert!(generate_prompt(55).contains("EP Score of 55"));
        let lines = format_preview(&badge());
        assert!(lines.contains(&"trust_score: 55".to_string()));
        assert_eq!(lines[0], "badge_token: bt_4f9c2...d3b6aa90");
        assert_eq!(lines[2], "expires_at: 2026-10-26 12:00 UTC");
    }
}
