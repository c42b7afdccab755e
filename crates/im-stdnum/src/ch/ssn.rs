//! Swiss social security number (AHV/AVS number, "Neue AHV-Nummer").
//!
//! Thirteen digits starting with the country code `756`, ending in an
//! EAN-13 check digit. Written as `756.NNNN.NNNN.NN`.

use crate::ean::Ean;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, split_groups, split_tail};

const INFO: KindInfo = KindInfo {
    name: "ch.ssn",
    country: Some("CH"),
    tag: "ssn",
    title: "Swiss social security number (AHV)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("7569217076985", "7569217076985"),
    Example::valid("756.9217.0769.85", "7569217076985"),
    Example::invalid("756.9217.0769.84", ValidationError::InvalidChecksum),
    Example::invalid("123.4567.8910.19", ValidationError::InvalidComponent),
    Example::invalid("756.9217.0769.8", ValidationError::InvalidLength),
    Example::invalid("756.9217.0769.8X", ValidationError::InvalidFormat),
    Example::formatted("7569217076985", "756.9217.0769.85"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ssn;

impl Identifier for Ssn {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " .-")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 13 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if !number.starts_with("756") {
            return Err(ValidationError::InvalidComponent);
        }
        let (payload, check) = split_tail(&number, 1);
        if self.calc_check_digit(payload)? != check {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        split_groups(&number, &[3, 4, 4]).join(".")
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Ssn {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Ean.calc_check_digit(payload)
    }
}

identifier_functions!(Ssn, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_then_validate() {
        let formatted = format("7569217076985");
        assert_eq!(formatted, "756.9217.0769.85");
        assert_eq!(validate(&formatted), Ok("7569217076985".to_string()));
    }

    #[test]
    fn test_component_checked_before_checksum() {
        // Wrong prefix and wrong check digit: the prefix is reported
        assert_eq!(validate("1234567891010"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("756921707698"), Ok("5".to_string()));
    }
}
