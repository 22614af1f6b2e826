//! In-memory transport for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};

type Reply = Result<HttpResponse, TransportError>;

/// Replays queued responses per `(method, path)` and records every request.
///
/// Paths are matched without the base URL and query string. A route with no
/// queued reply answers `404 {"error":"no mock route"}`. The last queued reply
/// for a route is sticky, so a single `reply` serves repeated calls.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    base_url: String,
    routes: Arc<Mutex<HashMap<(Method, String), VecDeque<Reply>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn reply(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        let body = if body.is_null() {
            Vec::new()
        } else {
            serde_json::to_vec(&body).unwrap()
        };
        self.push(method, path, Ok(HttpResponse { status, body }))
    }

    pub(crate) fn reply_raw(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(
            method,
            path,
            Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
        )
    }

    pub(crate) fn fail(&self, method: Method, path: &str) -> &Self {
        self.push(method, path, Err(TransportError("connection refused".into())))
    }

    fn push(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && self.path_of(&r.url) == path)
            .collect()
    }

    fn path_of(&self, url: &str) -> String {
        let path = url.strip_prefix(&self.base_url).unwrap_or(url);
        path.split('?').next().unwrap_or(path).to_string()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method, self.path_of(&request.url));
        self.requests.lock().unwrap().push(request);

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if queue.len() == 1 => queue.front().cloned().unwrap(),
            _ => Ok(HttpResponse {
                status: 404,
                body: br#"{"error":"no mock route"}"#.to_vec(),
            }),
        }
    }
}
