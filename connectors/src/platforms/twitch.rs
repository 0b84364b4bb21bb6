//! Twitch: claim URLs are linked from the profile bio.

use serde::Deserialize;
use themis_http::{endpoint_url, FetchError, HttpClient};
use themis_types::Identity;

use crate::strategy::free_text::{FreeTextLocator, FreeTextSource};
use crate::PlatformEndpoints;

/// `GET /twitch/users/{username}` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TwitchUser {
    pub id: String,
    pub username: String,
    pub bio: String,
}

pub struct TwitchSource;

impl FreeTextSource for TwitchSource {
    type Token = str;
    type Content = TwitchUser;

    fn platform(&self) -> &'static str {
        "twitch"
    }

    fn content_url(
        &self,
        endpoints: &PlatformEndpoints,
        username: &str,
    ) -> Result<String, FetchError> {
        endpoint_url(&endpoints.lookup, &["twitch", "users", username])
    }

    fn text_and_identity(&self, user: TwitchUser) -> (String, Identity) {
        let identity = Identity::new()
            .with("username", user.username.as_str())
            .with("id", user.id.as_str());
        (user.bio, identity)
    }
}

pub type TwitchLocator<H> = FreeTextLocator<H, TwitchSource>;

impl<H: HttpClient> FreeTextLocator<H, TwitchSource> {
    pub fn twitch(http: H, endpoints: PlatformEndpoints) -> Self {
        Self::new(http, endpoints, TwitchSource)
    }
}
