//! # OAuth connect redirects
//!
//! Connecting an identity anchor is a full-page navigation to the backend,
//! which then bounces through the provider's consent screen. Because it is a
//! navigation and not a fetch, the bearer token cannot ride in a header and is
//! passed as the `token` query parameter instead:
//!
//! ```text
//! {base_url}/api/identity/connect/google?token=<bearer>
//! {base_url}/api/identity/connect/linkedin?token=<bearer>
//! ```

use url::Url;

use crate::error::ApiError;
use crate::models::Provider;

/// Build the connect URL for `provider`, carrying `token` as a query parameter.
pub fn connect_url(base_url: &str, provider: Provider, token: &str) -> Result<String, ApiError> {
    let endpoint = format!(
        "{}/api/identity/connect/{}",
        base_url.trim_end_matches('/'),
        provider.oauth_name()
    );
    let mut url = Url::parse(&endpoint)
        .map_err(|e| ApiError::client(format!("Invalid API base URL: {}", e)))?;
    url.query_pairs_mut().append_pair("token", token);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_url_carries_token_in_query() {
        let url = connect_url("https://api.example.com", Provider::Gmail, "tok/+=").unwrap();
        assert_eq!(
            url,
            "https://api.example.com/api/identity/connect/google?token=tok%2F%2B%3D"
        );

        let url = connect_url("https://api.example.com", Provider::LinkedIn, "abc").unwrap();
        assert_eq!(url, "https://api.example.com/api/identity/connect/linkedin?token=abc");
    }

    #[test]
    fn test_connect_url_keeps_base_path() {
        let url = connect_url("https://host.example/backend", Provider::Gmail, "t").unwrap();
        assert_eq!(url, "https://host.example/backend/api/identity/connect/google?token=t");

        let url = connect_url("https://host.example/backend/", Provider::LinkedIn, "t").unwrap();
        assert_eq!(url, "https://host.example/backend/api/identity/connect/linkedin?token=t");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(connect_url("not a url", Provider::Gmail, "t").is_err());
    }
}
