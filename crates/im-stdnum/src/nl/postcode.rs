//! Dutch postal code.
//!
//! Four digits (no leading zero) and two letters, written `NNNN LL`.
//! `SA`, `SD` and `SS` are never assigned as letter pairs.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, ValidationError};
use crate::identifier::{Example, Identifier, KindInfo};
use crate::util::{clean, strip_country_prefix, uppercase_if_alpha};

lazy_static! {
    static ref POSTCODE_PATTERN: Regex = Regex::new(r"^([1-9][0-9]{3})([A-Z]{2})$").unwrap();
}

const INFO: KindInfo = KindInfo {
    name: "nl.postcode",
    country: Some("NL"),
    tag: "postcode",
    title: "Dutch postal code",
};

const EXAMPLES: &[Example] = &[
    Example::valid("2601 DC", "2601 DC"),
    Example::valid("NL-2611ET", "2611 ET"),
    Example::valid("2611et", "2611 ET"),
    Example::invalid("26112 ET", ValidationError::InvalidFormat),
    Example::invalid("0611 ET", ValidationError::InvalidFormat),
    Example::invalid("2611 SS", ValidationError::InvalidComponent),
    Example::invalid("", ValidationError::InvalidLength),
    Example::formatted("2601dc", "2601 DC"),
];

/// Letter pairs that are never assigned
const BLACKLIST: [&str; 3] = ["SA", "SD", "SS"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Postcode;

impl Identifier for Postcode {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = uppercase_if_alpha(&clean(raw, " -"));
        strip_country_prefix(&number, "NL").to_string()
    }

    /// Returns the presentation form `NNNN LL` rather than the compact form
    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if number.is_empty() {
            return Err(ValidationError::InvalidLength);
        }
        let captures = POSTCODE_PATTERN
            .captures(&number)
            .ok_or(ValidationError::InvalidFormat)?;
        let (digits, letters) = (&captures[1], &captures[2]);
        if BLACKLIST.contains(&letters) {
            return Err(ValidationError::InvalidComponent);
        }
        Ok(format!("{} {}", digits, letters))
    }

    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        match POSTCODE_PATTERN.captures(&number) {
            Some(captures) => format!("{} {}", &captures[1], &captures[2]),
            None => number,
        }
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

identifier_functions!(Postcode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact() {
        assert_eq!(compact("NL-2611ET"), "2611ET");
        assert_eq!(compact(" 2601 dc "), "2601DC");
    }

    #[test]
    fn test_validate_of_format_is_stable() {
        let formatted = format("2611ET");
        assert_eq!(validate(&formatted), validate("2611ET"));
    }
}
