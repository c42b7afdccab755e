//! FFI bindings for Swift/Kotlin via UniFFI.
//!
//! Kinds are addressed by dotted name (`ch.ssn`, `iban`) and resolved
//! through the default registry.

use thiserror::Error;

use crate::config::StdnumConfig;
use crate::error::{ConfigError, RegistryError, ValidationError};
use crate::identifier::Identifier;
use crate::registry::{registry, Registry};

/// FFI-safe error covering every failure the exported functions report
#[derive(Error, Debug, uniffi::Error)]
#[uniffi(flat_error)]
pub enum StdnumFfiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Identifier kind '{0}' has no check digit")]
    NoCheckDigit(String),
}

/// Metadata for one identifier kind
#[derive(Debug, Clone, uniffi::Record)]
pub struct KindSummary {
    pub name: String,
    pub country: Option<String>,
    pub tag: String,
    pub title: String,
}

fn kind(name: &str) -> Result<&'static dyn Identifier, StdnumFfiError> {
    Ok(registry().get(name)?)
}

/// Validate `number` as kind `name`, returning its canonical form
#[uniffi::export]
pub fn validate_number(name: String, number: String) -> Result<String, StdnumFfiError> {
    Ok(kind(&name)?.validate(&number)?)
}

#[uniffi::export]
pub fn is_valid_number(name: String, number: String) -> Result<bool, StdnumFfiError> {
    Ok(kind(&name)?.is_valid(&number))
}

#[uniffi::export]
pub fn compact_number(name: String, number: String) -> Result<String, StdnumFfiError> {
    Ok(kind(&name)?.compact(&number))
}

#[uniffi::export]
pub fn format_number(name: String, number: String) -> Result<String, StdnumFfiError> {
    Ok(kind(&name)?.format(&number))
}

/// Check digit(s) for `payload`, for kinds that define one
#[uniffi::export]
pub fn calc_check_digit(name: String, payload: String) -> Result<String, StdnumFfiError> {
    let engine = kind(&name)?
        .check_digit()
        .ok_or_else(|| StdnumFfiError::NoCheckDigit(name.clone()))?;
    Ok(engine.calc_check_digit(&payload)?)
}

/// Validate against a registry built from `config`
#[uniffi::export]
pub fn validate_number_with_config(
    config: StdnumConfig,
    name: String,
    number: String,
) -> Result<String, StdnumFfiError> {
    let registry = Registry::with_config(&config)?;
    Ok(registry.get(&name)?.validate(&number)?)
}

/// Names of every kind that accepts `number`
#[uniffi::export]
pub fn identify_number(number: String) -> Vec<String> {
    registry()
        .identify(&number)
        .into_iter()
        .map(String::from)
        .collect()
}

/// All registered kinds
#[uniffi::export]
pub fn list_kinds() -> Vec<KindSummary> {
    registry()
        .iter()
        .map(|kind| {
            let info = kind.info();
            KindSummary {
                name: info.name.to_string(),
                country: info.country.map(String::from),
                tag: info.tag.to_string(),
                title: info.title.to_string(),
            }
        })
        .collect()
}

/// Returns the version of im-stdnum
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
