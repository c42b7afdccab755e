//! Configuration for im-stdnum
//!
//! A handful of identifier kinds depend on data that changes outside of the
//! algorithm itself (lists of issued codes, policy on placeholder dates).
//! Those knobs live here and are applied when a [`crate::Registry`] is built.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Library-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct StdnumConfig {
    /// San Marino COE settings
    pub san_marino: SanMarinoConfig,
    /// Lithuanian personal code settings
    pub lithuania: LithuaniaConfig,
}

/// San Marino COE configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SanMarinoConfig {
    /// Replacement list of issued one- and two-digit codes; `None` keeps the built-in list
    pub coe_whitelist: Option<Vec<u16>>,
}

/// Lithuanian Asmens kodas configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct LithuaniaConfig {
    /// Reject codes whose date digits are not a calendar date
    pub validate_birth_date: bool,
}

impl Default for LithuaniaConfig {
    fn default() -> Self {
        Self {
            validate_birth_date: true,
        }
    }
}

impl StdnumConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        debug!(?config, "Loaded TOML configuration");
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        debug!(?config, "Loaded JSON configuration");
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(whitelist) = &self.san_marino.coe_whitelist {
            if whitelist.is_empty() {
                return Err(ConfigError::OutOfRange(
                    "san_marino.coe_whitelist must not be empty".to_string(),
                ));
            }
            if let Some(bad) = whitelist.iter().find(|&&n| !(1..=99).contains(&n)) {
                return Err(ConfigError::OutOfRange(format!(
                    "san_marino.coe_whitelist entry {} is not between 1 and 99",
                    bad
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StdnumConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.lithuania.validate_birth_date);
        assert_eq!(config.san_marino.coe_whitelist, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StdnumConfig::from_toml("[san_marino]\ncoe_whitelist = [3, 5]\n").unwrap();
        assert_eq!(config.san_marino.coe_whitelist, Some(vec![3, 5]));
        assert!(config.lithuania.validate_birth_date);
    }

    #[test]
    fn test_json_serialization() {
        let mut config = StdnumConfig::default();
        config.lithuania.validate_birth_date = false;
        let json = config.to_json().unwrap();
        let parsed = StdnumConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = StdnumConfig::default();
        config.san_marino.coe_whitelist = Some(vec![2, 4]);
        let toml = config.to_toml().unwrap();
        assert_eq!(StdnumConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_out_of_range() {
        let mut config = StdnumConfig::default();
        config.san_marino.coe_whitelist = Some(vec![4, 100]);
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));

        config.san_marino.coe_whitelist = Some(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = StdnumConfig::from_toml("san_marino = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
