//! Per-platform encoding conventions for signed values and addresses.
//!
//! Connectors disagree on both: some sign the raw UTF-8 text of `value`, some
//! sign its hex-decoded bytes; some publish uppercase hex addresses, some
//! bech32. Neither is inferred; each platform states its convention explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the claim's `value` string maps to the bytes that were signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueEncoding {
    /// The UTF-8 bytes of `value` itself.
    Utf8,
    /// `value` is hex; the signed bytes are its decoding.
    Hex,
}

impl ValueEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Hex => "hex",
        }
    }
}

impl fmt::Display for ValueEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueEncoding {
    type Err = EncodingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" | "text" => Ok(Self::Utf8),
            "hex" => Ok(Self::Hex),
            _ => Err(EncodingParseError(s.to_string())),
        }
    }
}

/// How the claim's `address` encodes `RIPEMD160(SHA256(pub_key))`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AddressEncoding {
    /// Hex digest, compared case-insensitively.
    #[default]
    Hex,
    /// Bech32 with an optional required human-readable prefix.
    Bech32 { hrp: Option<String> },
}

impl AddressEncoding {
    pub fn bech32(hrp: impl Into<String>) -> Self {
        Self::Bech32 {
            hrp: Some(hrp.into()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Bech32 { .. } => "bech32",
        }
    }
}

impl fmt::Display for AddressEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bech32 { hrp: Some(hrp) } => write!(f, "bech32({hrp})"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for AddressEncoding {
    type Err = EncodingParseError;

    /// Accepts `hex`, `bech32`, or `bech32:<hrp>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.split_once(':') {
            None if lower == "hex" => Ok(Self::Hex),
            None if lower == "bech32" => Ok(Self::Bech32 { hrp: None }),
            Some(("bech32", hrp)) if !hrp.is_empty() => Ok(Self::bech32(hrp)),
            _ => Err(EncodingParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown encoding: {0}")]
pub struct EncodingParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_encoding_parses_aliases() {
        assert_eq!("hex".parse::<ValueEncoding>(), Ok(ValueEncoding::Hex));
        assert_eq!("UTF-8".parse::<ValueEncoding>(), Ok(ValueEncoding::Utf8));
        assert_eq!("text".parse::<ValueEncoding>(), Ok(ValueEncoding::Utf8));
        assert!("base64".parse::<ValueEncoding>().is_err());
    }

    #[test]
    fn address_encoding_parses_hrp() {
        assert_eq!("hex".parse::<AddressEncoding>(), Ok(AddressEncoding::Hex));
        assert_eq!(
            "bech32".parse::<AddressEncoding>(),
            Ok(AddressEncoding::Bech32 { hrp: None })
        );
        assert_eq!(
            "bech32:desmos".parse::<AddressEncoding>(),
            Ok(AddressEncoding::bech32("desmos"))
        );
        assert!("bech32:".parse::<AddressEncoding>().is_err());
        assert!("base58".parse::<AddressEncoding>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for enc in [AddressEncoding::Hex, AddressEncoding::Bech32 { hrp: None }] {
            assert_eq!(enc.to_string().parse::<AddressEncoding>(), Ok(enc));
        }
        assert_eq!(AddressEncoding::bech32("desmos").to_string(), "bech32(desmos)");
    }

    #[test]
    fn value_encoding_serde_is_lowercase() {
        let json = serde_json::to_string(&ValueEncoding::Utf8).unwrap();
        assert_eq!(json, "\"utf8\"");
    }
}
