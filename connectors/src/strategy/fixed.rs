//! Fixed resource: the token alone determines one raw-content URL.

use themis_http::{endpoint_url, FetchError};
use themis_types::{Candidate, Identity, Located};
use themis_verification::Locator;

use super::bad_endpoint;
use crate::PlatformEndpoints;

/// Identifies a public gist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GistToken {
    pub username: String,
    pub gist_id: String,
}

impl GistToken {
    pub fn new(username: impl Into<String>, gist_id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            gist_id: gist_id.into(),
        }
    }
}

/// Locates a claim stored as the raw content of a public GitHub gist.
///
/// Performs no I/O itself; the resolver fetches the single candidate.
pub struct GistLocator {
    endpoints: PlatformEndpoints,
}

impl GistLocator {
    pub fn new(endpoints: PlatformEndpoints) -> Self {
        Self { endpoints }
    }

    /// `{gist}/{username}/{gist_id}/raw/`
    pub fn raw_url(&self, token: &GistToken) -> Result<String, FetchError> {
        endpoint_url(
            &self.endpoints.gist,
            &[token.username.as_str(), token.gist_id.as_str(), "raw", ""],
        )
    }
}

impl Locator for GistLocator {
    type Token = GistToken;

    fn platform(&self) -> &str {
        "github"
    }

    fn locate(&self, token: &GistToken) -> Located {
        match self.raw_url(token) {
            Ok(url) => Located::new(vec![Candidate::Indirect(url)], Identity::new()),
            Err(e) => bad_endpoint("github", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_raw_gist_url() {
        let locator = GistLocator::new(PlatformEndpoints::default());
        let token = GistToken::new("RiccardoM", "720e0072390a901bb80e59fd60d7fded");
        let located = locator.locate(&token);
        assert_eq!(
            located.candidates,
            vec![Candidate::indirect(
                "https://gist.githubusercontent.com/RiccardoM/720e0072390a901bb80e59fd60d7fded/raw/"
            )]
        );
        assert!(located.identity.is_empty());
    }

    #[test]
    fn bad_gist_host_finds_nothing() {
        let locator = GistLocator::new(PlatformEndpoints::new("https://x.example", "::"));
        assert!(locator.locate(&GistToken::new("a", "b")).is_empty());
    }
}
