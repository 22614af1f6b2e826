//! # Transport: the single seam between the client and the network
//!
//! [`ApiClient`](crate::ApiClient) never talks to `reqwest` directly. It builds an
//! [`HttpRequest`] and hands it to a [`Transport`], which returns the status and
//! raw body. [`HttpTransport`] is the production implementation (browser `fetch`
//! on wasm, hyper on native); tests plug in an in-memory transport that records
//! requests and replays canned responses.

mod http;
pub use http::HttpTransport;

#[cfg(test)]
pub(crate) mod mock;

use std::fmt;

/// HTTP methods used by the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// A file sent as a multipart form field.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Upload),
}

/// A fully resolved request: absolute URL plus the bearer token, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

/// Status code and raw body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Async request executor.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>>;
}
