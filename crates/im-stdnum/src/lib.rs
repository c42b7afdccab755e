//! im-stdnum - Standard number validation
//!
//! Parse, validate, reformat and compute check digits for national and
//! international identifier numbers: tax and VAT numbers, personal codes,
//! bank and trade codes.
//!
//! - **Identifier**: the uniform contract (`compact`, `validate`, `is_valid`,
//!   `format`, `calc_check_digit`) implemented by every kind
//! - **Checksum**: Luhn and ISO 7064 engines, parameterized by alphabet
//! - **Kinds**: one module per identifier kind, grouped by ISO 3166 country
//! - **Registry**: lookup by country and tag or by dotted name
//! - **Harness**: runs the worked examples every kind carries
//! - **Config**: data overrides (San Marino COE list, Lithuanian date policy)
//!
//! # Example
//!
//! ```
//! use im_stdnum::{ch, ValidationError};
//!
//! assert_eq!(ch::ssn::validate("756.9217.0769.85"), Ok("7569217076985".to_string()));
//! assert_eq!(ch::ssn::validate("756.9217.0769.84"), Err(ValidationError::InvalidChecksum));
//! assert_eq!(ch::ssn::format("7569217076985"), "756.9217.0769.85");
//! ```
//!
//! Every operation is a pure function of its input and is safe to call
//! from any number of threads.

#[macro_use]
pub mod identifier;

pub mod checksum;
pub mod config;
pub mod error;
pub mod harness;
pub mod iso3166;
pub mod registry;
pub mod util;

// International
pub mod bic;
pub mod ean;
pub mod iban;
pub mod imei;
pub mod isbn;

// National
pub mod be;
pub mod br;
pub mod ca;
pub mod ch;
pub mod cl;
pub mod co;
pub mod cy;
pub mod ec;
pub mod ee;
pub mod es;
pub mod fr;
pub mod gn;
pub mod lt;
pub mod nl;
pub mod no;
pub mod pl;
pub mod si;
pub mod sm;
pub mod tr;
pub mod ua;
pub mod us;
pub mod za;

#[cfg(feature = "uniffi")]
pub mod ffi;

pub use checksum::Alphabet;
pub use config::StdnumConfig;
pub use error::{ConfigError, RegistryError, Result, ValidationError};
pub use identifier::{CheckDigit, Example, Expected, Identifier, KindInfo};
pub use registry::{registry, Registry};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
