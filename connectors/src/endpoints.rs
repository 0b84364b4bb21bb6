//! Base URLs of the services locators talk to.

use serde::{Deserialize, Serialize};

/// Default Themis lookup service.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "https://themis.morpheus.desmos.network";

/// Default raw gist host.
pub const DEFAULT_GIST_ENDPOINT: &str = "https://gist.githubusercontent.com";

/// Endpoint configuration passed to every locator at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEndpoints {
    /// Lookup service answering `/{platform}/...` and `/nslookup/{domain}`.
    pub lookup: String,
    /// Host serving `/{user}/{gist}/raw/`.
    pub gist: String,
}

impl PlatformEndpoints {
    pub fn new(lookup: impl Into<String>, gist: impl Into<String>) -> Self {
        Self {
            lookup: lookup.into(),
            gist: gist.into(),
        }
    }
}

impl Default for PlatformEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_ENDPOINT, DEFAULT_GIST_ENDPOINT)
    }
}
