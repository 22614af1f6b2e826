//! # ApiClient: the single point of HTTP access
//!
//! Every call to the backend goes through [`ApiClient::request`]:
//!
//! 1. The endpoint path is appended to the configured base URL.
//! 2. The bearer token is read from durable storage *at call time* and attached,
//!    so a token written by one part of the app is seen by every other part.
//! 3. The response is classified. 2xx bodies are decoded into the caller's type
//!    (an empty body decodes as JSON `null`, so `()` works for bodiless
//!    endpoints); anything else becomes an [`ApiError`].
//! 4. A 401 is a global event: the durable token is removed and every hook
//!    registered through [`ApiClient::on_unauthorized`] runs once, before the
//!    error is returned to the caller.
//!
//! The client is cheap to clone. Clones share the transport, the storage and
//! the hook list, so a hook registered on one clone fires for calls made
//! through any other.

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{Durable, KeyValueStore};

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, Upload};

/// Callback invoked after a 401 response cleared the stored token.
pub type UnauthorizedHook = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    storage: Durable<S>,
    hooks: Rc<RefCell<Vec<UnauthorizedHook>>>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(base_url: &str, transport: T, store: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            storage: Durable::new(store),
            hooks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Durable storage shared with the session store and the access gate.
    pub fn storage(&self) -> &Durable<S> {
        &self.storage
    }

    /// Register a callback for session invalidation (HTTP 401).
    pub fn on_unauthorized(&self, hook: impl Fn() + 'static) {
        self.hooks.borrow_mut().push(Rc::new(hook));
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(Method::Get, endpoint, RequestBody::Empty).await
    }

    pub async fn post<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::client(format!("Could not encode request: {}", e)))?;
        self.request(Method::Post, endpoint, RequestBody::Json(body)).await
    }

    /// POST without a body.
    pub async fn post_empty<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(Method::Post, endpoint, RequestBody::Empty).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, endpoint, RequestBody::Empty).await
    }

    /// Multipart upload. Same bearer and error handling as JSON requests.
    pub async fn upload<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        upload: Upload,
    ) -> Result<R, ApiError> {
        self.request(Method::Post, endpoint, RequestBody::Multipart(upload))
            .await
    }

    /// Send a request and decode a successful JSON body into `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        let response = self.execute(method, endpoint, body).await?;
        decode(&response)
    }

    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            bearer: self.storage.token(),
            body,
        };
        tracing::debug!("{} {}", method, endpoint);

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, endpoint, e);
            ApiError::network()
        })?;

        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 {
            tracing::warn!("{} {} returned 401, clearing session", method, endpoint);
            self.invalidate_session();
        }

        Err(ApiError::from_response(response.status, &response.body))
    }

    fn invalidate_session(&self) {
        self.storage.clear_token();
        // Snapshot so hooks may register further hooks without a borrow conflict.
        let hooks: Vec<UnauthorizedHook> = self.hooks.borrow().iter().cloned().collect();
        for hook in hooks {
            hook();
        }
    }
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|e| ApiError::decode(response.status, e))
}

/// Append URL-encoded query pairs to an endpoint path. `None` values are skipped.
pub(crate) fn with_query(endpoint: &str, pairs: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("{}?{}", endpoint, serializer.finish())
    } else {
        endpoint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transport::mock::MockTransport;
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::Cell;
    use store::{keys, MemoryStore};

    const BASE: &str = "http://api.test";

    fn client() -> (ApiClient<MockTransport, MemoryStore>, MockTransport, MemoryStore) {
        let transport = MockTransport::new(BASE);
        let store = MemoryStore::new();
        let client = ApiClient::new(BASE, transport.clone(), store.clone());
        (client, transport, store)
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        ok: bool,
    }

    #[tokio::test]
    async fn test_attaches_bearer_from_storage_at_call_time() {
        let (client, transport, store) = client();
        transport.reply(Method::Get, "/api/ping", 200, json!({"ok": true}));

        let _: Pong = client.get("/api/ping").await.unwrap();
        store.set(keys::TOKEN, "tok_live");
        let pong: Pong = client.get("/api/ping").await.unwrap();
        assert_eq!(pong, Pong { ok: true });

        let requests = transport.requests();
        assert_eq!(requests[0].bearer, None);
        assert_eq!(requests[1].bearer.as_deref(), Some("tok_live"));
        assert_eq!(requests[1].url, "http://api.test/api/ping");
    }

    #[tokio::test]
    async fn test_serializes_json_body() {
        let (client, transport, _) = client();
        transport.reply(Method::Post, "/api/echo", 200, json!({"ok": true}));

        let _: Pong = client
            .post("/api/echo", &json!({"code": "EP-AB12C-34DE9"}))
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"code": "EP-AB12C-34DE9"}))
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_status_zero() {
        let (client, transport, _) = client();
        transport.fail(Method::Get, "/api/ping");

        let err = client.get::<Pong>("/api/ping").await.unwrap_err();
        assert_eq!(err.status, 0);
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.message, "Network error");
    }

    #[tokio::test]
    async fn test_error_status_and_message() {
        let (client, transport, _) = client();
        transport.reply(
            Method::Post,
            "/api/auth/login",
            400,
            json!({"message": "Invalid email or password"}),
        );

        let err = client
            .post::<Pong, _>("/api/auth/login", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "Invalid email or password");
    }

    #[tokio::test]
    async fn test_error_body_parse_failure_is_tolerated() {
        let (client, transport, _) = client();
        transport.reply_raw(Method::Get, "/api/ping", 500, "Internal Server Error");

        let err = client.get::<Pong>("/api/ping").await.unwrap_err();
        assert_eq!(err.status, 500);
        assert_eq!(err.data, json!({}));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_typed_error() {
        let (client, transport, _) = client();
        transport.reply(Method::Get, "/api/ping", 200, json!({"unexpected": 1}));

        let err = client.get::<Pong>("/api/ping").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
        assert_eq!(err.status, 200);
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_unit() {
        let (client, transport, _) = client();
        transport.reply(Method::Delete, "/api/identity/gmail", 204, serde_json::Value::Null);

        let result: Result<(), _> = client.delete("/api/identity/gmail").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_401_clears_token_and_fires_hooks_once() {
        let (client, transport, store) = client();
        store.set(keys::TOKEN, "tok_stale");
        transport.reply(Method::Get, "/api/user/me", 401, json!({"error": "expired"}));

        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        // Registered on a clone: hooks are shared
        client.clone().on_unauthorized(move || counter.set(counter.get() + 1));

        let err = client.get::<Pong>("/api/user/me").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(store.get(keys::TOKEN).is_none());
        assert_eq!(fired.get(), 1);
    }

    #[tokio::test]
    async fn test_non_401_errors_keep_token() {
        let (client, transport, store) = client();
        store.set(keys::TOKEN, "tok");
        transport.reply(Method::Get, "/api/ping", 403, json!({"error": "forbidden"}));

        let _ = client.get::<Pong>("/api/ping").await;
        assert_eq!(store.get(keys::TOKEN).as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_upload_uses_multipart_with_bearer() {
        let (client, transport, store) = client();
        store.set(keys::TOKEN, "tok");
        transport.reply(Method::Post, "/api/receipts/upload", 200, json!({"ok": true}));

        let upload = Upload {
            field: "receipt".into(),
            file_name: "r.png".into(),
            mime: "image/png".into(),
            bytes: vec![1, 2, 3],
        };
        let _: Pong = client.upload("/api/receipts/upload", upload.clone()).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.bearer.as_deref(), Some("tok"));
        assert_eq!(request.body, RequestBody::Multipart(upload));
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/listings", &[("eventId", None)]), "/api/listings");
        assert_eq!(
            with_query(
                "/api/listings",
                &[("eventId", Some("ev 1".into())), ("status", None), ("section", Some("A".into()))]
            ),
            "/api/listings?eventId=ev+1&section=A"
        );
    }
}
