//! The [`HttpClient`] seam and its reqwest implementation.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::FetchError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("themis/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET access to the outside world.
pub trait HttpClient {
    /// Fetch `url`. Any completed exchange is `Ok`, whatever its status.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;

    /// Fetch `url`, require a 2xx status and return the body.
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url)?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }
        Ok(response.body)
    }

    /// Fetch `url`, require a 2xx status and decode the body as JSON.
    fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let body = self.get_text(url)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Body(e.to_string()))
    }
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

/// Settings for [`ReqwestClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Production [`HttpClient`] backed by `reqwest::blocking`.
///
/// Requests are sent once. A timeout is reported like any other failure.
pub struct ReqwestClient {
    http_client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { http_client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        tracing::debug!(url = %parsed, "GET");
        let response = self.http_client.get(parsed).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::trace!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed {
        response: HttpResponse,
        calls: Cell<usize>,
    }

    impl HttpClient for Fixed {
        fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.response.clone())
        }
    }

    fn fixed(status: u16, body: &str) -> Fixed {
        Fixed {
            response: HttpResponse::new(status, body),
            calls: Cell::new(0),
        }
    }

    #[test]
    fn success_range() {
        assert!(HttpResponse::ok("").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
    }

    #[test]
    fn get_text_rejects_non_2xx() {
        let client = fixed(500, "oops");
        assert_eq!(
            client.get_text("https://example.com"),
            Err(FetchError::Status(500))
        );
    }

    #[test]
    fn get_json_decodes_body() {
        let client = fixed(200, r#"{"txt":[]}"#);
        let json = client.get_json("https://example.com").unwrap();
        assert!(json["txt"].is_array());
    }

    #[test]
    fn get_json_reports_bad_body() {
        let client = fixed(200, "<html>");
        assert!(matches!(
            client.get_json("https://example.com"),
            Err(FetchError::Body(_))
        ));
    }

    #[test]
    fn reference_forwards_to_client() {
        let client = fixed(200, "x");
        let by_ref: &dyn HttpClient = &client;
        assert_eq!(by_ref.get_text("https://example.com").unwrap(), "x");
        assert_eq!((&client).get_text("https://example.com").unwrap(), "x");
        assert_eq!(client.calls.get(), 2);
    }

    #[test]
    fn default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("themis/"));
    }

    #[test]
    fn reqwest_client_rejects_invalid_url_without_sending() {
        let client = ReqwestClient::new(&HttpConfig::default()).unwrap();
        assert!(matches!(
            client.get("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
