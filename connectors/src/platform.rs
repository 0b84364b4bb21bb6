//! Supported platforms and their verification conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use themis_types::{AddressEncoding, ValueEncoding};
use themis_verification::VerificationPolicy;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Discord,
    Telegram,
    Instagram,
    Twitter,
    Youtube,
    Twitch,
    Domain,
    Github,
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Self::Discord,
        Self::Telegram,
        Self::Instagram,
        Self::Twitter,
        Self::Youtube,
        Self::Twitch,
        Self::Domain,
        Self::Github,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Telegram => "telegram",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Twitch => "twitch",
            Self::Domain => "domain",
            Self::Github => "github",
        }
    }

    /// How claim values published on this platform are signed.
    ///
    /// Twitter and GitHub claims sign the raw text; every other platform signs
    /// the hex-decoded bytes.
    pub fn default_value_encoding(&self) -> ValueEncoding {
        match self {
            Self::Twitter | Self::Github => ValueEncoding::Utf8,
            Self::Discord
            | Self::Telegram
            | Self::Instagram
            | Self::Youtube
            | Self::Twitch
            | Self::Domain => ValueEncoding::Hex,
        }
    }

    pub fn default_address_encoding(&self) -> AddressEncoding {
        AddressEncoding::Hex
    }

    /// Whether the signed value must equal the account name being verified.
    pub fn binds_value_to_account(&self) -> bool {
        matches!(self, Self::Github)
    }

    pub fn default_policy(&self) -> VerificationPolicy {
        VerificationPolicy::new(self.default_value_encoding(), self.default_address_encoding())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);
