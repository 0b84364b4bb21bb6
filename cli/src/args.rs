//! Command-line surface of the `themis` binary.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

use themis_connectors::platforms::TwitterMethodError;
use themis_connectors::{CallDataError, GistToken, Platform, PlatformRequest, TwitterToken};
use themis_types::{AddressEncoding, ValueEncoding};
use themis_utils::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "themis",
    version,
    about = "Verify that a platform account published a claim signed by a blockchain key"
)]
pub struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "THEMIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the lookup service.
    #[arg(long, env = "THEMIS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Base URL serving raw gist content.
    #[arg(long, env = "THEMIS_GIST_ENDPOINT")]
    pub gist_endpoint: Option<String>,

    /// Per-request HTTP timeout in seconds.
    #[arg(long, env = "THEMIS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log format: "human" or "json".
    #[arg(long, env = "THEMIS_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "THEMIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Override how the signed value is encoded: "utf8" or "hex".
    #[arg(long, global = true)]
    pub value_encoding: Option<ValueEncoding>,

    /// Override the address encoding: "hex", "bech32" or "bech32:<hrp>".
    #[arg(long, global = true)]
    pub address_encoding: Option<AddressEncoding>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Claim returned by the lookup service for a Discord user.
    Discord { username: String },

    /// Claim returned by the lookup service for a Telegram user.
    Telegram { username: String },

    /// Claim returned by the lookup service for an Instagram user.
    Instagram { username: String },

    /// Claim link posted in a tweet or a profile bio.
    Twitter {
        /// "tweet" or "profile".
        #[arg(long)]
        method: String,
        /// Tweet id or username.
        #[arg(long)]
        value: String,
    },

    /// Claim link in a YouTube channel description.
    Youtube { user_id: String },

    /// Claim link in a Twitch bio.
    Twitch { username: String },

    /// Claim or claim link in a domain's DNS TXT records.
    Domain { domain: String },

    /// Claim stored as a GitHub gist.
    Github { username: String, gist_id: String },

    /// Oracle data-source entry point: a platform plus hex-encoded JSON call data.
    DataSource { platform: Platform, call_data: String },

    /// Print the effective configuration as TOML and exit.
    ShowConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("call data is not valid hex: {0}")]
    InvalidHex(String),

    #[error("call data is not valid JSON: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    CallData(#[from] CallDataError),

    #[error(transparent)]
    TwitterMethod(#[from] TwitterMethodError),
}

/// Decode the hex-encoded JSON object an oracle script passes as call data.
pub fn decode_call_data(hex_json: &str) -> Result<Value, ArgsError> {
    let bytes = hex::decode(hex_json.trim()).map_err(|e| ArgsError::InvalidHex(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ArgsError::InvalidJson(e.to_string()))
}

impl Command {
    /// The verification request this command asks for. `None` for commands
    /// that do not verify anything.
    pub fn to_request(&self) -> Result<Option<PlatformRequest>, ArgsError> {
        let request = match self {
            Self::Discord { username } => PlatformRequest::Discord {
                username: username.clone(),
            },
            Self::Telegram { username } => PlatformRequest::Telegram {
                username: username.clone(),
            },
            Self::Instagram { username } => PlatformRequest::Instagram {
                username: username.clone(),
            },
            Self::Twitter { method, value } => {
                PlatformRequest::Twitter(TwitterToken::from_method(method, value.as_str())?)
            }
            Self::Youtube { user_id } => PlatformRequest::Youtube {
                user_id: user_id.clone(),
            },
            Self::Twitch { username } => PlatformRequest::Twitch {
                username: username.clone(),
            },
            Self::Domain { domain } => PlatformRequest::Domain {
                domain: domain.clone(),
            },
            Self::Github { username, gist_id } => {
                PlatformRequest::Github(GistToken::new(username.as_str(), gist_id.as_str()))
            }
            Self::DataSource {
                platform,
                call_data,
            } => PlatformRequest::from_call_data(*platform, &decode_call_data(call_data)?)?,
            Self::ShowConfig => return Ok(None),
        };
        Ok(Some(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("themis").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn discord_subcommand() {
        let cli = parse(&["discord", "Riccardo Montagnin#5414"]);
        assert_eq!(
            cli.command.to_request().unwrap(),
            Some(PlatformRequest::Discord {
                username: "Riccardo Montagnin#5414".into()
            })
        );
    }

    #[test]
    fn twitter_subcommand_uses_method() {
        let cli = parse(&["twitter", "--method", "tweet", "--value", "1392033585675317252"]);
        assert_eq!(
            cli.command.to_request().unwrap(),
            Some(PlatformRequest::Twitter(TwitterToken::Tweet(
                "1392033585675317252".into()
            )))
        );
    }

    #[test]
    fn twitter_bad_method_is_rejected() {
        let cli = parse(&["twitter", "--method", "dm", "--value", "x"]);
        assert!(matches!(
            cli.command.to_request(),
            Err(ArgsError::TwitterMethod(_))
        ));
    }

    #[test]
    fn github_subcommand_takes_two_positionals() {
        let cli = parse(&["github", "RiccardoM", "720e0072390a901bb80e59fd60d7fded"]);
        assert_eq!(
            cli.command.to_request().unwrap(),
            Some(PlatformRequest::Github(GistToken {
                username: "RiccardoM".into(),
                gist_id: "720e0072390a901bb80e59fd60d7fded".into(),
            }))
        );
    }

    #[test]
    fn global_overrides_parse_after_subcommand() {
        let cli = parse(&["domain", "forbole.com", "--address-encoding", "bech32:desmos"]);
        assert_eq!(cli.address_encoding, Some(AddressEncoding::bech32("desmos")));
        assert_eq!(cli.value_encoding, None);
    }

    #[test]
    fn data_source_decodes_hex_json() {
        let call_data = hex::encode(r#"{"username":"ricmontagnin"}"#);
        let cli = parse(&["data-source", "telegram", &call_data]);
        assert_eq!(
            cli.command.to_request().unwrap(),
            Some(PlatformRequest::Telegram {
                username: "ricmontagnin".into()
            })
        );
    }

    #[test]
    fn data_source_rejects_bad_hex() {
        let cli = parse(&["data-source", "discord", "zz"]);
        assert!(matches!(
            cli.command.to_request(),
            Err(ArgsError::InvalidHex(_))
        ));
    }

    #[test]
    fn data_source_reports_missing_field() {
        let call_data = hex::encode(r#"{"user":"x"}"#);
        let cli = parse(&["data-source", "instagram", &call_data]);
        assert_eq!(
            cli.command.to_request(),
            Err(ArgsError::CallData(CallDataError::Missing("username")))
        );
    }

    #[test]
    fn unknown_platform_fails_to_parse() {
        let result = Cli::try_parse_from(["themis", "data-source", "myspace", "7b7d"]);
        assert!(result.is_err());
    }

    #[test]
    fn decode_call_data_rejects_non_json() {
        assert!(matches!(
            decode_call_data(&hex::encode("not json")),
            Err(ArgsError::InvalidJson(_))
        ));
    }

    #[test]
    fn show_config_has_no_request() {
        assert_eq!(parse(&["show-config"]).command.to_request(), Ok(None));
    }
}
