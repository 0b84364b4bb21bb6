//! Direct endpoint: `GET {lookup}/{platform}/{username}` answers with the
//! claim document itself.

use themis_http::{endpoint_url, HttpClient};
use themis_types::{Candidate, Identity, Located};
use themis_verification::Locator;

use super::bad_endpoint;
use crate::PlatformEndpoints;

/// Locator for platforms whose lookup service stores the claim verbatim.
///
/// Used for Discord and Telegram (claims stored by the bots) and Instagram.
pub struct DirectEndpointLocator<H> {
    http: H,
    endpoints: PlatformEndpoints,
    platform: &'static str,
}

impl<H: HttpClient> DirectEndpointLocator<H> {
    pub fn new(http: H, endpoints: PlatformEndpoints, platform: &'static str) -> Self {
        Self {
            http,
            endpoints,
            platform,
        }
    }

    pub fn discord(http: H, endpoints: PlatformEndpoints) -> Self {
        Self::new(http, endpoints, "discord")
    }

    pub fn telegram(http: H, endpoints: PlatformEndpoints) -> Self {
        Self::new(http, endpoints, "telegram")
    }

    pub fn instagram(http: H, endpoints: PlatformEndpoints) -> Self {
        Self::new(http, endpoints, "instagram")
    }
}

impl<H: HttpClient> Locator for DirectEndpointLocator<H> {
    type Token = str;

    fn platform(&self) -> &str {
        self.platform
    }

    fn locate(&self, username: &str) -> Located {
        let url = match endpoint_url(&self.endpoints.lookup, &[self.platform, username]) {
            Ok(url) => url,
            Err(e) => return bad_endpoint(self.platform, e),
        };

        match self.http.get_text(&url) {
            Ok(body) => Located::new(
                vec![Candidate::Literal(body)],
                Identity::new().with("username", username),
            ),
            Err(e) => {
                tracing::debug!(platform = self.platform, %url, error = %e, "lookup failed");
                Located::nothing()
            }
        }
    }
}
