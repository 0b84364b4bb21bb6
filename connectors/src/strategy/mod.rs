//! The four ways a platform exposes claim documents.
//!
//! - [`direct`]: a lookup endpoint returns the claim itself
//! - [`free_text`]: URLs are extracted from human-written text
//! - [`dns_txt`]: TXT records hold the claim inline or a URL to it
//! - [`fixed`]: the token determines one raw-content URL
//!
//! Every strategy turns upstream failure into [`Located::nothing`].

pub mod direct;
pub mod dns_txt;
pub mod fixed;
pub mod free_text;

use serde::de::DeserializeOwned;
use themis_http::{FetchError, HttpClient};
use themis_types::Located;

/// GET `url` and decode it as `T`, logging and swallowing any failure.
pub(crate) fn fetch_json<H, T>(http: &H, platform: &str, url: &str) -> Option<T>
where
    H: HttpClient,
    T: DeserializeOwned,
{
    let decoded = http.get_json(url).and_then(|json| {
        serde_json::from_value(json).map_err(|e| FetchError::Body(e.to_string()))
    });
    match decoded {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(platform, url, error = %e, "lookup failed");
            None
        }
    }
}

/// Log an endpoint construction failure and report nothing found.
pub(crate) fn bad_endpoint(platform: &str, error: FetchError) -> Located {
    tracing::warn!(platform, %error, "cannot build lookup url");
    Located::nothing()
}
