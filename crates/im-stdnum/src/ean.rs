//! EAN (International Article Number) / GTIN.
//!
//! Accepts GTIN-8, UPC-A (12), EAN-13 and GTIN-14. The last digit is a
//! check digit over weights 3,1,3,... counted from the right.

use crate::checksum::gtin_check_value;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, digit_char, is_all_decimal_digits, parse_digits, split_tail};

const INFO: KindInfo = KindInfo {
    name: "ean",
    country: None,
    tag: "ean",
    title: "EAN (International Article Number)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("73513537", "73513537"),
    Example::valid("978-0-471-11709-4", "9780471117094"),
    Example::valid("98412345678908", "98412345678908"),
    Example::valid("036000291452", "036000291452"),
    Example::invalid("73513536", ValidationError::InvalidChecksum),
    Example::invalid("7351353", ValidationError::InvalidLength),
    Example::invalid("7351353A", ValidationError::InvalidFormat),
];

/// Permitted lengths of a compact EAN
pub const LENGTHS: [usize; 4] = [8, 12, 13, 14];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ean;

impl Identifier for Ean {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if !LENGTHS.contains(&char_len(&number)) {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        let (payload, check) = split_tail(&number, 1);
        if self.calc_check_digit(payload)? != check {
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

impl CheckDigit for Ean {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        Ok(digit_char(gtin_check_value(&digits)))
    }
}

identifier_functions!(Ean, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("978047111709"), Ok("4".to_string()));
        assert_eq!(calc_check_digit("964123456789"), Ok("4".to_string()));
        assert_eq!(calc_check_digit("12-3"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_all_lengths() {
        assert!(is_valid("96385074"));
        assert!(is_valid("036000291452"));
        assert!(is_valid("9780471117094"));
        assert!(is_valid("98412345678908"));
    }

    #[test]
    fn test_length_checked_before_format() {
        assert_eq!(validate("abc"), Err(ValidationError::InvalidLength));
        assert_eq!(validate(""), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Eight characters but not ASCII digits
        assert_eq!(validate("١٢٣٤٥٦٧٨"), Err(ValidationError::InvalidFormat));
        // Eight bytes, four characters
        assert_eq!(validate("١٢٣٤"), Err(ValidationError::InvalidLength));
    }
}
