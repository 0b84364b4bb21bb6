//! Platform connectors for Themis.
//!
//! Each platform differs only in how its claim document is located. This
//! crate provides the four location strategies, the platform sources that
//! plug into them, and [`verify_request`] which picks the right locator for a
//! [`PlatformRequest`] and runs the shared verification protocol.

pub mod connector;
pub mod endpoints;
pub mod platform;
pub mod platforms;
pub mod request;
pub mod strategy;

pub use connector::verify_request;
pub use endpoints::{PlatformEndpoints, DEFAULT_GIST_ENDPOINT, DEFAULT_LOOKUP_ENDPOINT};
pub use platform::{Platform, UnknownPlatform};
pub use platforms::{TwitchLocator, TwitterLocator, TwitterToken, YoutubeLocator};
pub use request::{CallDataError, PlatformRequest};
pub use strategy::direct::DirectEndpointLocator;
pub use strategy::dns_txt::DnsTxtLocator;
pub use strategy::fixed::{GistLocator, GistToken};
pub use strategy::free_text::{extract_urls, FreeTextLocator, FreeTextSource};
