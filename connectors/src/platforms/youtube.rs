//! YouTube: claim URLs are linked from the channel description.

use serde::Deserialize;
use themis_http::{endpoint_url, FetchError, HttpClient};
use themis_types::Identity;

use crate::strategy::free_text::{FreeTextLocator, FreeTextSource};
use crate::PlatformEndpoints;

/// `GET /youtube/users/{id}` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct YoutubeChannel {
    pub id: String,
    pub title: String,
    pub description: String,
}

pub struct YoutubeSource;

impl FreeTextSource for YoutubeSource {
    type Token = str;
    type Content = YoutubeChannel;

    fn platform(&self) -> &'static str {
        "youtube"
    }

    fn content_url(
        &self,
        endpoints: &PlatformEndpoints,
        user_id: &str,
    ) -> Result<String, FetchError> {
        endpoint_url(&endpoints.lookup, &["youtube", "users", user_id])
    }

    fn text_and_identity(&self, channel: YoutubeChannel) -> (String, Identity) {
        // Only the id goes into the output line; titles may contain commas.
        (channel.description, Identity::new().with("id", channel.id))
    }
}

pub type YoutubeLocator<H> = FreeTextLocator<H, YoutubeSource>;

impl<H: HttpClient> FreeTextLocator<H, YoutubeSource> {
    pub fn youtube(http: H, endpoints: PlatformEndpoints) -> Self {
        Self::new(http, endpoints, YoutubeSource)
    }
}
