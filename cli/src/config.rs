//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use themis_connectors::{
    Platform, PlatformEndpoints, DEFAULT_GIST_ENDPOINT, DEFAULT_LOOKUP_ENDPOINT,
};
use themis_http::client::{DEFAULT_USER_AGENT, HttpConfig};
use themis_types::{AddressEncoding, ValueEncoding};
use themis_utils::LogFormat;
use themis_verification::VerificationPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("unknown platform in [platforms]: {0}")]
    UnknownPlatform(String),

    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

/// Address rendering named in a `[platforms.<name>]` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    Hex,
    Bech32,
}

/// Per-platform overrides of the built-in verification conventions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_encoding: Option<ValueEncoding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_encoding: Option<AddressFormat>,
    /// Required bech32 prefix, e.g. `"desmos"`. Only used with `bech32`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bech32_hrp: Option<String>,
}

/// Configuration for the `themis` binary.
///
/// Can be loaded from a TOML file via [`ThemisConfig::from_toml_file`];
/// CLI flags and `THEMIS_*` environment variables override it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemisConfig {
    /// Base URL of the lookup service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Base URL serving raw gist content.
    #[serde(default = "default_gist_endpoint")]
    pub gist_endpoint: String,

    /// Per-request HTTP timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Keyed by platform name.
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformOverrides>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_endpoint() -> String {
    DEFAULT_LOOKUP_ENDPOINT.to_string()
}

fn default_gist_endpoint() -> String {
    DEFAULT_GIST_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ThemisConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for name in self.platforms.keys() {
            if name.parse::<Platform>().is_err() {
                return Err(ConfigError::UnknownPlatform(name.clone()));
            }
        }
        Ok(())
    }

    pub fn endpoints(&self) -> PlatformEndpoints {
        PlatformEndpoints::new(&self.endpoint, &self.gist_endpoint)
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_user_agent(&self.user_agent)
    }

    /// The platform's built-in policy with any `[platforms.<name>]` overrides.
    pub fn policy_for(&self, platform: Platform) -> VerificationPolicy {
        let mut policy = platform.default_policy();
        let Some(overrides) = self.platforms.get(platform.as_str()) else {
            return policy;
        };

        if let Some(encoding) = overrides.value_encoding {
            policy.value_encoding = encoding;
        }
        match overrides.address_encoding {
            Some(AddressFormat::Hex) => policy.address_encoding = AddressEncoding::Hex,
            Some(AddressFormat::Bech32) => {
                policy.address_encoding = AddressEncoding::Bech32 {
                    hrp: overrides.bech32_hrp.clone(),
                }
            }
            None => {}
        }
        policy
    }
}

impl Default for ThemisConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            gist_endpoint: default_gist_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            platforms: BTreeMap::new(),
        }
    }
}
