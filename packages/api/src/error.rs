//! # Client error taxonomy
//!
//! Every non-success outcome of an API call is an [`ApiError`]. It carries the
//! HTTP `status` (0 when no response arrived), a `message` suitable for display
//! and the raw error body as `data`. [`ErrorKind`] classifies the failure:
//!
//! | Kind | When |
//! |------|------|
//! | `Network` | the request never produced a response (status 0) |
//! | `Unauthorized` | HTTP 401; the client has already cleared the session |
//! | `Validation` | any other 4xx; the server message is shown verbatim |
//! | `Server` | 5xx or any other non-2xx status |
//! | `Decode` | a 2xx body that does not match the expected schema |
//! | `Rejected` | a well-formed response reporting a business-rule failure |
//! | `Client` | a precondition checked before any request (e.g. no token) |

use serde_json::Value;

/// Fallback shown when the server gave no usable message.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message used for transport failures.
pub const NETWORK_MESSAGE: &str = "Network error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    Validation,
    Server,
    Decode,
    Rejected,
    Client,
}

/// Structured error returned by every API call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: u16,
    pub data: Value,
}

impl ApiError {
    /// No response reached the client.
    pub fn network() -> Self {
        Self {
            kind: ErrorKind::Network,
            message: NETWORK_MESSAGE.to_string(),
            status: 0,
            data: Value::Object(Default::default()),
        }
    }

    /// Build an error from a non-2xx response. An unparseable body becomes `{}`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let data: Value = serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::Object(Default::default()));
        let message = server_message(&data)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        let kind = match status {
            401 => ErrorKind::Unauthorized,
            400..=499 => ErrorKind::Validation,
            _ => ErrorKind::Server,
        };
        Self {
            kind,
            message,
            status,
            data,
        }
    }

    /// A 2xx body that did not match the expected shape.
    pub fn decode(status: u16, reason: impl std::fmt::Display) -> Self {
        tracing::warn!("Malformed response (status {}): {}", status, reason);
        Self {
            kind: ErrorKind::Decode,
            message: "Unexpected response from server".to_string(),
            status,
            data: Value::Object(Default::default()),
        }
    }

    /// A well-formed response that reports failure (e.g. `success: false`).
    pub fn rejected(status: u16, message: Option<String>, data: Value) -> Self {
        Self {
            kind: ErrorKind::Rejected,
            message: message.unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
            status,
            data,
        }
    }

    /// A precondition failed before any request was made.
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Client,
            message: message.into(),
            status: 0,
            data: Value::Object(Default::default()),
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == ErrorKind::Network
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    /// Text safe to show to the user.
    ///
    /// Server-provided messages pass through for validation and business-rule
    /// failures; everything else collapses to a generic string.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::Network => NETWORK_MESSAGE.to_string(),
            ErrorKind::Validation | ErrorKind::Rejected | ErrorKind::Client
                if !self.message.trim().is_empty() =>
            {
                self.message.clone()
            }
            ErrorKind::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            _ => match server_message(&self.data) {
                Some(message) => message,
                None => GENERIC_MESSAGE.to_string(),
            },
        }
    }
}

/// Server message from an error body: `message`, then `error`.
fn server_message(data: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|field| data.get(field)?.as_str())
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_error_has_status_zero() {
        let err = ApiError::network();
        assert_eq!(err.status, 0);
        assert!(err.is_network());
        assert_eq!(err.user_message(), "Network error");
    }

    #[test]
    fn test_from_response_prefers_message_then_error() {
        let err = ApiError::from_response(400, br#"{"message":"Email taken","error":"dup"}"#);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Email taken");
        assert_eq!(err.user_message(), "Email taken");

        let err = ApiError::from_response(422, br#"{"error":"Invalid invite code"}"#);
        assert_eq!(err.message, "Invalid invite code");
        assert_eq!(err.data, json!({"error": "Invalid invite code"}));
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_empty_object() {
        let err = ApiError::from_response(502, b"<html>Bad gateway</html>");
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.status, 502);
        assert_eq!(err.data, json!({}));
        assert_eq!(err.message, "Request failed with status 502");
        // Raw status text never reaches the user
        assert_eq!(err.user_message(), GENERIC_MESSAGE);
    }

    #[test]
    fn test_unauthorized_kind() {
        let err = ApiError::from_response(401, br#"{"error":"jwt expired"}"#);
        assert!(err.is_unauthorized());
        assert!(!err.user_message().contains("jwt"));
    }

    #[test]
    fn test_decode_error_is_generic_for_user() {
        let err = ApiError::decode(200, "missing field `token`");
        assert_eq!(err.kind, ErrorKind::Decode);
        assert_eq!(err.status, 200);
        assert_eq!(err.user_message(), GENERIC_MESSAGE);
    }
}
