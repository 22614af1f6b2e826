//! # Client configuration: `enpassant.toml`
//!
//! Defines the TOML configuration the client is built with. The web binary
//! embeds the file at compile time; native builds may read it from disk. Every
//! field has a default, so a missing or empty file is equivalent to
//! [`ClientConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"   # backend origin, no trailing slash
//!
//! [gate]
//! trust_anonymous_flag = true          # anonymous visitors unlock via the local flag
//! ```
//!
//! Environment overrides are layered on top by `api::config::load`.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `enpassant.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub gate: GateSection,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Origin of the REST backend. Endpoint paths are appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Access gate settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GateSection {
    /// Whether an anonymous visitor holding the local beta flag sees gated
    /// content without a server check.
    #[serde(default = "default_trust_anonymous_flag")]
    pub trust_anonymous_flag: bool,
}

fn default_trust_anonymous_flag() -> bool {
    true
}

impl Default for GateSection {
    fn default() -> Self {
        Self {
            trust_anonymous_flag: default_trust_anonymous_flag(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the backend origin. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the anonymous-flag policy.
    pub fn with_trust_anonymous_flag(mut self, trust: bool) -> Self {
        self.gate.trust_anonymous_flag = trust;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "enpassant.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert!(config.gate.trust_anonymous_flag);
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.enpassant.example/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.enpassant.example");
        assert!(config.gate.trust_anonymous_flag);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default()
            .with_base_url("https://api.example.com/")
            .with_trust_anonymous_flag(false);
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
