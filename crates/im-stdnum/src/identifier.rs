//! The uniform contract every identifier kind implements
//!
//! An identifier kind is a value implementing [`Identifier`]. Kinds whose
//! check digit can be computed independently also implement [`CheckDigit`]
//! and hand it out through [`Identifier::check_digit`].

use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::util::split_tail;

/// Static metadata describing an identifier kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KindInfo {
    /// Dotted name, unique across the registry (e.g. "ch.ssn", "ean")
    pub name: &'static str,

    /// ISO 3166-1 alpha-2 code of the issuing country, `None` for international kinds
    pub country: Option<&'static str>,

    /// Tag within the country (e.g. "ssn", "vat")
    pub tag: &'static str,

    /// Human-readable title
    pub title: &'static str,
}

/// A worked example carried by an identifier kind.
///
/// These double as documentation and as the regression suite run by
/// [`crate::harness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub input: &'static str,
    pub expected: Expected,
}

/// What an [`Example`] input must produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Expected {
    /// `validate(input)` returns this string
    Valid(&'static str),

    /// `validate(input)` fails with this error
    Invalid(ValidationError),

    /// `format(input)` returns this string
    Formatted(&'static str),
}

impl Example {
    pub const fn valid(input: &'static str, output: &'static str) -> Self {
        Self {
            input,
            expected: Expected::Valid(output),
        }
    }

    pub const fn invalid(input: &'static str, error: ValidationError) -> Self {
        Self {
            input,
            expected: Expected::Invalid(error),
        }
    }

    pub const fn formatted(input: &'static str, output: &'static str) -> Self {
        Self {
            input,
            expected: Expected::Formatted(output),
        }
    }
}

/// The five-operation contract shared by every identifier kind.
///
/// Implementations must be pure: the same input always yields the same
/// output, and `validate` depends on the compact form only.
pub trait Identifier: Send + Sync {
    /// Static metadata for this kind
    fn info(&self) -> &KindInfo;

    /// Normalize raw input (separators, case, country prefix). Never fails.
    fn compact(&self, raw: &str) -> String;

    /// Return the canonical form iff `raw` is a well-formed identifier of this kind.
    ///
    /// Checks run in a fixed order: length, alphabet/format, components, checksum.
    fn validate(&self, raw: &str) -> Result<String>;

    /// True iff [`Identifier::validate`] succeeds
    fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }

    /// Conventional presentation form. Never re-validates.
    fn format(&self, raw: &str) -> String {
        self.compact(raw)
    }

    /// Check digit engine, for kinds that define an independently computable one
    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        None
    }

    /// Worked examples for this kind
    fn examples(&self) -> &'static [Example] {
        &[]
    }
}

/// Computes the terminal check character(s) of an identifier
pub trait CheckDigit: Send + Sync {
    /// Check character(s) to append to `payload`.
    ///
    /// Only the arithmetic is checked: characters the math cannot use give
    /// `InvalidFormat`, payload lengths the math is undefined for give
    /// `InvalidLength`, and a residue with no legal check character gives
    /// `InvalidChecksum`.
    fn calc_check_digit(&self, payload: &str) -> Result<String>;

    /// Number of check characters
    fn check_digit_len(&self) -> usize {
        1
    }

    /// Whether `check` completes `payload`.
    ///
    /// Schemes where more than one check value satisfies the arithmetic
    /// override this; `calc_check_digit` returns the canonical one.
    fn is_check_digit(&self, payload: &str, check: &str) -> bool {
        self.calc_check_digit(payload).as_deref() == Ok(check)
    }

    /// Split a compact number into `(payload, check)`.
    ///
    /// Returns `None` when the number is too short or carries no check digit.
    fn split<'a>(&self, compact: &'a str) -> Option<(&'a str, &'a str)> {
        let n = self.check_digit_len();
        if compact.chars().count() <= n {
            return None;
        }
        Some(split_tail(compact, n))
    }
}

/// Generates the module-level free functions for a kind value.
///
/// `identifier_functions!(Kind)` adds `compact`, `validate`, `is_valid` and
/// `format`; the `check_digit` form also adds `calc_check_digit`.
macro_rules! identifier_functions {
    ($kind:expr) => {
        /// Normalize raw input to the compact form
        pub fn compact(raw: &str) -> String {
            $crate::identifier::Identifier::compact(&$kind, raw)
        }

        /// Return the canonical form, or the reason the input is not valid
        pub fn validate(raw: &str) -> $crate::error::Result<String> {
            $crate::identifier::Identifier::validate(&$kind, raw)
        }

        /// Check whether the input is valid
        pub fn is_valid(raw: &str) -> bool {
            $crate::identifier::Identifier::is_valid(&$kind, raw)
        }

        /// Reformat to the conventional presentation form
        pub fn format(raw: &str) -> String {
            $crate::identifier::Identifier::format(&$kind, raw)
        }
    };
    ($kind:expr, check_digit) => {
        identifier_functions!($kind);

        /// Calculate the check digit(s) for a payload
        pub fn calc_check_digit(payload: &str) -> $crate::error::Result<String> {
            $crate::identifier::CheckDigit::calc_check_digit(&$kind, payload)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl CheckDigit for Fixed {
        fn calc_check_digit(&self, _payload: &str) -> Result<String> {
            Ok("0".to_string())
        }

        fn check_digit_len(&self) -> usize {
            2
        }
    }

    #[test]
    fn test_default_split_uses_check_len() {
        assert_eq!(Fixed.split("040301926"), Some(("0403019", "26")));
        assert_eq!(Fixed.split("26"), None);
    }

    #[test]
    fn test_example_serializes_with_outcome() {
        let example = Example::invalid("x", ValidationError::InvalidLength);
        let json = serde_json::to_string(&example).unwrap();
        assert_eq!(
            json,
            r#"{"input":"x","expected":{"outcome":"invalid","value":"invalid_length"}}"#
        );
    }
}
