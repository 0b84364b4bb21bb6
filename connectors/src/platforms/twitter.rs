//! Twitter: claim URLs are posted in a tweet or in the profile bio.

use serde::Deserialize;
use std::str::FromStr;
use themis_http::{endpoint_url, FetchError, HttpClient};
use themis_types::Identity;
use thiserror::Error;

use crate::strategy::free_text::{FreeTextLocator, FreeTextSource};
use crate::PlatformEndpoints;

/// Where on Twitter the claim link was posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TwitterToken {
    /// A public tweet, by id.
    Tweet(String),
    /// A profile bio, by username.
    Profile(String),
}

impl TwitterToken {
    /// Build a token from the `method` / `value` pair used by callers.
    pub fn from_method(method: &str, value: impl Into<String>) -> Result<Self, TwitterMethodError> {
        Ok(match method.parse::<TwitterMethod>()? {
            TwitterMethod::Tweet => Self::Tweet(value.into()),
            TwitterMethod::Profile => Self::Profile(value.into()),
        })
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Tweet(id) => id,
            Self::Profile(username) => username,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwitterMethod {
    Tweet,
    Profile,
}

impl FromStr for TwitterMethod {
    type Err = TwitterMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tweet" => Ok(Self::Tweet),
            "profile" => Ok(Self::Profile),
            other => Err(TwitterMethodError(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid twitter method: {0} (expected 'tweet' or 'profile')")]
pub struct TwitterMethodError(pub String);

/// `GET /twitter/users/{username}` response, also embedded as a tweet author.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TwitterUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub bio: String,
}

/// `GET /twitter/tweets/{id}` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tweet {
    #[serde(default)]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author: Option<TwitterUser>,
}

/// Either lookup response. Tweets are recognised by their `text` field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TwitterContent {
    Tweet(Tweet),
    User(TwitterUser),
}

fn author_identity(user: &TwitterUser) -> Identity {
    Identity::new()
        .with("username", user.username.as_str())
        .with("id", user.id.as_str())
}

/// [`FreeTextSource`] for tweets and profile bios.
pub struct TwitterSource;

impl FreeTextSource for TwitterSource {
    type Token = TwitterToken;
    type Content = TwitterContent;

    fn platform(&self) -> &'static str {
        "twitter"
    }

    fn content_url(
        &self,
        endpoints: &PlatformEndpoints,
        token: &TwitterToken,
    ) -> Result<String, FetchError> {
        match token {
            TwitterToken::Tweet(id) => {
                endpoint_url(&endpoints.lookup, &["twitter", "tweets", id.as_str()])
            }
            TwitterToken::Profile(username) => {
                endpoint_url(&endpoints.lookup, &["twitter", "users", username.as_str()])
            }
        }
    }

    fn text_and_identity(&self, content: TwitterContent) -> (String, Identity) {
        match content {
            TwitterContent::Tweet(tweet) => {
                let identity = tweet
                    .author
                    .as_ref()
                    .map(author_identity)
                    .unwrap_or_default();
                (tweet.text, identity)
            }
            TwitterContent::User(user) => {
                let identity = author_identity(&user);
                (user.bio, identity)
            }
        }
    }
}

pub type TwitterLocator<H> = FreeTextLocator<H, TwitterSource>;

impl<H: HttpClient> FreeTextLocator<H, TwitterSource> {
    pub fn twitter(http: H, endpoints: PlatformEndpoints) -> Self {
        Self::new(http, endpoints, TwitterSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parsing() {
        assert_eq!(
            TwitterToken::from_method("tweet", "1368883070590476292"),
            Ok(TwitterToken::Tweet("1368883070590476292".into()))
        );
        assert_eq!(
            TwitterToken::from_method("profile", "ricmontagnin"),
            Ok(TwitterToken::Profile("ricmontagnin".into()))
        );
        assert!(TwitterToken::from_method("status", "1").is_err());
    }

    #[test]
    fn content_urls() {
        let endpoints = PlatformEndpoints::default();
        assert_eq!(
            TwitterSource
                .content_url(&endpoints, &TwitterToken::Tweet("1368883070590476292".into()))
                .unwrap(),
            "https://themis.morpheus.desmos.network/twitter/tweets/1368883070590476292"
        );
        assert_eq!(
            TwitterSource
                .content_url(&endpoints, &TwitterToken::Profile("ricmontagnin".into()))
                .unwrap(),
            "https://themis.morpheus.desmos.network/twitter/users/ricmontagnin"
        );
    }

    #[test]
    fn tweet_and_user_responses_are_told_apart() {
        let tweet: TwitterContent = serde_json::from_str(
            r#"{"id":"1","text":"https://t.co/bLokglOAel","author":{"id":"42","username":"ricmontagnin"}}"#,
        )
        .unwrap();
        assert!(matches!(tweet, TwitterContent::Tweet(_)));

        let user: TwitterContent =
            serde_json::from_str(r#"{"id":"42","username":"ricmontagnin","bio":"hi"}"#).unwrap();
        assert!(matches!(user, TwitterContent::User(_)));
    }

    #[test]
    fn identity_comes_from_author() {
        let content = TwitterContent::Tweet(Tweet {
            id: "1".into(),
            text: "proof https://t.co/bLokglOAel".into(),
            author: Some(TwitterUser {
                id: "42".into(),
                name: "Riccardo".into(),
                username: "ricmontagnin".into(),
                bio: String::new(),
            }),
        });
        let (text, identity) = TwitterSource.text_and_identity(content);
        assert_eq!(text, "proof https://t.co/bLokglOAel");
        assert_eq!(identity.to_string(), "ricmontagnin,42");
    }
}
