use serde::{Deserialize, Serialize};
use std::fmt;

/// External identity provider backing an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gmail,
    #[serde(rename = "linkedin")]
    LinkedIn,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Gmail, Provider::LinkedIn];

    /// Path segment used by `/api/identity/:provider`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gmail => "gmail",
            Provider::LinkedIn => "linkedin",
        }
    }

    /// OAuth flow name used by the connect redirect.
    pub fn oauth_name(&self) -> &'static str {
        match self {
            Provider::Gmail => "google",
            Provider::LinkedIn => "linkedin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Provider::Gmail => "Gmail",
            Provider::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A connected external account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub provider: Provider,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub account_created_at: Option<String>,
    #[serde(default)]
    pub connection_count: Option<u32>,
}

/// Response of `GET /api/identity/anchors`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnchorsResponse {
    #[serde(default)]
    pub anchors: Vec<Anchor>,
}

impl AnchorsResponse {
    pub fn find(&self, provider: Provider) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.provider == provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anchor_shape() {
        let resp: AnchorsResponse = serde_json::from_value(json!({
            "anchors": [
                {"provider": "gmail", "email_address": "a@gmail.com", "account_created_at": "2012-04-01", "connection_count": 310},
                {"provider": "linkedin", "email_address": null}
            ]
        }))
        .unwrap();
        assert_eq!(resp.anchors.len(), 2);
        assert_eq!(resp.find(Provider::Gmail).unwrap().connection_count, Some(310));
        assert!(resp.find(Provider::LinkedIn).unwrap().email_address.is_none());
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result: Result<Anchor, _> = serde_json::from_value(json!({"provider": "myspace"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(serde_json::to_value(Provider::LinkedIn).unwrap(), json!("linkedin"));
        assert_eq!(Provider::Gmail.as_str(), "gmail");
        assert_eq!(Provider::Gmail.oauth_name(), "google");
    }
}
