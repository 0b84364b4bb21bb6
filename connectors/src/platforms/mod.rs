//! Platform-specific sources for the free-text strategy.
//!
//! Direct-endpoint, DNS and gist platforms need no per-platform code beyond
//! their constructors in [`crate::strategy`].

pub mod twitch;
pub mod twitter;
pub mod youtube;

pub use twitch::{TwitchLocator, TwitchSource, TwitchUser};
pub use twitter::{
    Tweet, TwitterContent, TwitterLocator, TwitterMethod, TwitterMethodError, TwitterSource,
    TwitterToken, TwitterUser,
};
pub use youtube::{YoutubeChannel, YoutubeLocator, YoutubeSource};
