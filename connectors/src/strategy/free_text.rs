//! Free-text extraction: every `http(s)` URL in platform text is a candidate.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use themis_http::{FetchError, HttpClient};
use themis_types::{Candidate, Identity, Located};
use themis_verification::Locator;

use super::{bad_endpoint, fetch_json};
use crate::PlatformEndpoints;

const URL_PATTERN: &str = r"https?://[^\s]+";

fn url_regex() -> Option<&'static Regex> {
    static URL: OnceLock<Option<Regex>> = OnceLock::new();
    URL.get_or_init(|| match Regex::new(URL_PATTERN) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::error!(error = %e, "URL pattern failed to compile");
            None
        }
    })
    .as_ref()
}

/// All URLs in `text`, in the order they appear.
///
/// A match runs to the next whitespace, so trailing punctuation is kept.
pub fn extract_urls(text: &str) -> Vec<String> {
    let Some(regex) = url_regex() else {
        return Vec::new();
    };
    regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// One `Indirect` candidate per URL in `text`.
pub fn candidates_from_text(text: &str) -> Vec<Candidate> {
    extract_urls(text)
        .into_iter()
        .map(Candidate::Indirect)
        .collect()
}

/// A platform whose claim is linked from free text.
pub trait FreeTextSource {
    type Token: ?Sized;
    /// Lookup response shape.
    type Content: DeserializeOwned;

    fn platform(&self) -> &'static str;

    /// Where to fetch the content for `token`.
    fn content_url(
        &self,
        endpoints: &PlatformEndpoints,
        token: &Self::Token,
    ) -> Result<String, FetchError>;

    /// The free text to scan, plus whatever identity the platform asserts.
    fn text_and_identity(&self, content: Self::Content) -> (String, Identity);
}

/// Locator for any [`FreeTextSource`].
pub struct FreeTextLocator<H, S> {
    http: H,
    endpoints: PlatformEndpoints,
    source: S,
}

impl<H: HttpClient, S: FreeTextSource> FreeTextLocator<H, S> {
    pub fn new(http: H, endpoints: PlatformEndpoints, source: S) -> Self {
        Self {
            http,
            endpoints,
            source,
        }
    }
}

impl<H: HttpClient, S: FreeTextSource> Locator for FreeTextLocator<H, S> {
    type Token = S::Token;

    fn platform(&self) -> &str {
        self.source.platform()
    }

    fn locate(&self, token: &S::Token) -> Located {
        let platform = self.source.platform();
        let url = match self.source.content_url(&self.endpoints, token) {
            Ok(url) => url,
            Err(e) => return bad_endpoint(platform, e),
        };
        let Some(content) = fetch_json::<_, S::Content>(&self.http, platform, &url) else {
            return Located::nothing();
        };

        let (text, identity) = self.source.text_and_identity(content);
        let candidates = candidates_from_text(&text);
        tracing::debug!(platform, urls = candidates.len(), "scanned free text");
        Located::new(candidates, identity)
    }
}
