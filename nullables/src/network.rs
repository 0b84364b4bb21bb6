//! Nullable HTTP client: scripted responses, recorded requests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;
use themis_http::{FetchError, HttpClient, HttpResponse};

/// A test HTTP client that answers from a routing table.
///
/// URLs with no route fail as a connection error, like an unreachable host.
pub struct NullHttpClient {
    routes: RefCell<HashMap<String, Result<HttpResponse, FetchError>>>,
    /// Every URL requested, in order.
    requests: RefCell<Vec<String>>,
}

impl NullHttpClient {
    pub fn new() -> Self {
        Self {
            routes: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Route `url` to a 200 response with `body`.
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.respond(url, HttpResponse::ok(body));
        self
    }

    /// Route `url` to a 200 response carrying `json`.
    pub fn with_json(self, url: impl Into<String>, json: &Value) -> Self {
        self.with_body(url, json.to_string())
    }

    /// Route `url` to a response with the given status.
    pub fn with_status(self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.respond(url, HttpResponse::new(status, body));
        self
    }

    /// Route `url` to a transport-level failure.
    pub fn with_error(self, url: impl Into<String>, error: FetchError) -> Self {
        self.routes.borrow_mut().insert(url.into(), Err(error));
        self
    }

    /// Add or replace a route after construction.
    pub fn respond(&self, url: impl Into<String>, response: HttpResponse) {
        self.routes.borrow_mut().insert(url.into(), Ok(response));
    }

    /// All requested URLs (for assertions).
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// How many times `url` was requested.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| *u == url).count()
    }

    pub fn total_requests(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Forget recorded requests; routes are kept.
    pub fn reset(&self) {
        self.requests.borrow_mut().clear();
    }
}

impl Default for NullHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for NullHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.borrow().get(url) {
            Some(response) => response.clone(),
            None => Err(FetchError::Connect(format!("no route for {url}"))),
        }
    }
}
