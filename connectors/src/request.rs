//! A typed verification request for any platform.

use serde_json::Value;
use thiserror::Error;

use crate::platforms::{TwitterMethodError, TwitterToken};
use crate::strategy::fixed::GistToken;
use crate::Platform;

/// One platform plus the token that identifies the account there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlatformRequest {
    Discord { username: String },
    Telegram { username: String },
    Instagram { username: String },
    Twitter(TwitterToken),
    Youtube { user_id: String },
    Twitch { username: String },
    Domain { domain: String },
    Github(GistToken),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallDataError {
    #[error("call data must be a JSON object")]
    NotAnObject,

    #[error("missing '{0}' value")]
    Missing(&'static str),

    #[error("'{0}' must be a string")]
    NotAString(&'static str),

    #[error(transparent)]
    TwitterMethod(#[from] TwitterMethodError),
}

impl PlatformRequest {
    pub fn platform(&self) -> Platform {
        match self {
            Self::Discord { .. } => Platform::Discord,
            Self::Telegram { .. } => Platform::Telegram,
            Self::Instagram { .. } => Platform::Instagram,
            Self::Twitter(_) => Platform::Twitter,
            Self::Youtube { .. } => Platform::Youtube,
            Self::Twitch { .. } => Platform::Twitch,
            Self::Domain { .. } => Platform::Domain,
            Self::Github(_) => Platform::Github,
        }
    }

    /// The account name a signed value must equal, for platforms that bind it.
    pub fn account_name(&self) -> Option<&str> {
        match self {
            Self::Github(token) if self.platform().binds_value_to_account() => {
                Some(token.username.as_str())
            }
            _ => None,
        }
    }

    /// Decode the JSON call data the data-source entry point receives.
    ///
    /// | platform                      | keys                  |
    /// |-------------------------------|-----------------------|
    /// | discord, telegram, instagram, twitch | `username`     |
    /// | youtube                       | `user_id`             |
    /// | domain                        | `domain`              |
    /// | github                        | `username`, `gist_id` |
    /// | twitter                       | `method`, `value`     |
    pub fn from_call_data(platform: Platform, data: &Value) -> Result<Self, CallDataError> {
        let object = data.as_object().ok_or(CallDataError::NotAnObject)?;
        let field = |key: &'static str| -> Result<String, CallDataError> {
            match object.get(key) {
                None => Err(CallDataError::Missing(key)),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(CallDataError::NotAString(key)),
            }
        };

        Ok(match platform {
            Platform::Discord => Self::Discord {
                username: field("username")?,
            },
            Platform::Telegram => Self::Telegram {
                username: field("username")?,
            },
            Platform::Instagram => Self::Instagram {
                username: field("username")?,
            },
            Platform::Twitch => Self::Twitch {
                username: field("username")?,
            },
            Platform::Youtube => Self::Youtube {
                user_id: field("user_id")?,
            },
            Platform::Domain => Self::Domain {
                domain: field("domain")?,
            },
            Platform::Github => Self::Github(GistToken::new(field("username")?, field("gist_id")?)),
            Platform::Twitter => {
                Self::Twitter(TwitterToken::from_method(&field("method")?, field("value")?)?)
            }
        })
    }
}
