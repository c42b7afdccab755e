//! Error types for im-stdnum
//!
//! Validation failures form a closed set of four kinds. Registry and
//! configuration failures are separate types: they signal programmer or
//! deployment mistakes, not bad user input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for identifier operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Why an identifier was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum ValidationError {
    /// The compact form has a length this kind does not allow
    #[error("The number has an invalid length.")]
    InvalidLength,

    /// A character is outside the alphabet, or a letter/digit sits where the other is required
    #[error("The number has an invalid format.")]
    InvalidFormat,

    /// The check digit or check character does not match
    #[error("The number's checksum or check digit is invalid.")]
    InvalidChecksum,

    /// A semantic part (prefix, region, date, program code) is wrong
    #[error("One of the parts of the number is invalid or unknown.")]
    InvalidComponent,
}

impl ValidationError {
    /// All four kinds, in check order
    pub fn all() -> &'static [ValidationError] {
        &[
            ValidationError::InvalidLength,
            ValidationError::InvalidFormat,
            ValidationError::InvalidComponent,
            ValidationError::InvalidChecksum,
        ]
    }

    /// Stable snake_case code, matching the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidLength => "invalid_length",
            ValidationError::InvalidFormat => "invalid_format",
            ValidationError::InvalidChecksum => "invalid_checksum",
            ValidationError::InvalidComponent => "invalid_component",
        }
    }
}

/// Lookup failures in the kind registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No kind is registered for this country
    #[error("No identifier kinds registered for country: {0}")]
    UnknownCountry(String),

    /// The country exists but has no kind with this tag
    #[error("Unknown identifier kind '{tag}' for country {country}")]
    UnknownKind { country: String, tag: String },

    /// No kind is registered under this dotted name
    #[error("Unknown identifier kind: {0}")]
    UnknownName(String),
}

/// Configuration loading and checking failures
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML or JSON could not be parsed
    #[error("Config parse error: {0}")]
    Parse(String),

    /// A value is outside its allowed range
    #[error("Config value out of range: {0}")]
    OutOfRange(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidLength.to_string(),
            "The number has an invalid length."
        );
        assert_eq!(
            ValidationError::InvalidChecksum.to_string(),
            "The number's checksum or check digit is invalid."
        );
    }

    #[test]
    fn test_codes_match_serde() {
        for kind in ValidationError::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
            let back: ValidationError = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }

    #[test]
    fn test_registry_error_message() {
        let err = RegistryError::UnknownKind {
            country: "CH".to_string(),
            tag: "vat".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown identifier kind 'vat' for country CH");
    }
}
