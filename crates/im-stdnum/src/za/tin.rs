//! South African tax reference number (TIN).
//!
//! Ten digits starting with 0, 1, 2, 3 or 9, Luhn check digit.

use crate::checksum::luhn::Luhn;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits};

const INFO: KindInfo = KindInfo {
    name: "za.tin",
    country: Some("ZA"),
    tag: "tin",
    title: "South African tax reference number",
};

const EXAMPLES: &[Example] = &[
    Example::valid("0001339050", "0001339050"),
    Example::valid("2449/494/16/6", "2449494166"),
    Example::invalid("2449/494/16/5", ValidationError::InvalidChecksum),
    Example::invalid("4123456784", ValidationError::InvalidComponent),
    Example::invalid("012345678", ValidationError::InvalidLength),
    Example::invalid("012345678A", ValidationError::InvalidFormat),
];

const LEADING_DIGITS: &str = "01239";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tin;

impl Identifier for Tin {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -/")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 10 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if !number.starts_with(|c: char| LEADING_DIGITS.contains(c)) {
            return Err(ValidationError::InvalidComponent);
        }
        if Luhn::DECIMAL.checksum(&number)? != 0 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Tin {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Luhn::DECIMAL.calc_check_digit(payload)
    }
}

identifier_functions!(Tin, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_digit_checked_before_luhn() {
        assert_eq!(validate("4123456785"), Err(ValidationError::InvalidComponent));
        assert!(is_valid("0123456782"));
    }
}
