//! Runtime configuration: `enpassant.toml` plus environment overrides.
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `EP_API_URL` | `api.base_url` |
//! | `EP_TRUST_ANONYMOUS_FLAG` | `gate.trust_anonymous_flag` (`true`/`false`/`1`/`0`) |
//!
//! Native builds read the process environment after loading `.env` through
//! `dotenvy`. The browser has no environment, so wasm builds take the values
//! baked in at compile time.

use store::ClientConfig;

pub const API_URL_VAR: &str = "EP_API_URL";
pub const TRUST_ANONYMOUS_FLAG_VAR: &str = "EP_TRUST_ANONYMOUS_FLAG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {var}")]
    InvalidVar { var: &'static str, value: String },
}

/// Parse the embedded config file and apply environment overrides.
pub fn load(toml_text: &str) -> Result<ClientConfig, ConfigError> {
    let config = ClientConfig::from_toml(toml_text).map_err(|source| ConfigError::Parse {
        file: ClientConfig::filename(),
        source,
    })?;
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();
    let config = apply_overrides(config, env_var)?;
    tracing::info!(
        "API base URL {}, anonymous flag trusted: {}",
        config.api.base_url,
        config.gate.trust_anonymous_flag
    );
    Ok(config)
}

/// Like [`load`], but a broken file or variable falls back to defaults.
pub fn load_or_default(toml_text: &str) -> ClientConfig {
    load(toml_text).unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {}", e);
        ClientConfig::default()
    })
}

fn apply_overrides(
    mut config: ClientConfig,
    lookup: impl Fn(&'static str) -> Option<String>,
) -> Result<ClientConfig, ConfigError> {
    if let Some(url) = lookup(API_URL_VAR).filter(|u| !u.trim().is_empty()) {
        config = config.with_base_url(url.trim());
    }
    if let Some(value) = lookup(TRUST_ANONYMOUS_FLAG_VAR) {
        let trust = parse_bool(&value).ok_or(ConfigError::InvalidVar {
            var: TRUST_ANONYMOUS_FLAG_VAR,
            value,
        })?;
        config = config.with_trust_anonymous_flag(trust);
    }
    Ok(config)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_var(name: &'static str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_var(name: &'static str) -> Option<String> {
    let value = match name {
        API_URL_VAR => option_env!("EP_API_URL"),
        TRUST_ANONYMOUS_FLAG_VAR => option_env!("EP_TRUST_ANONYMOUS_FLAG"),
        _ => None,
    };
    value.map(str::to_string)
}
