//! Dutch citizen identification number (BSN, Burgerservicenummer).
//!
//! Nine digits; shorter numbers are left-padded with zeros. Valid numbers
//! pass the "11-proof": weights 9 down to 2 over the first eight digits,
//! minus the last digit, must be a multiple of 11.

use crate::checksum::{mod11_char, weighted_sum, TenRule};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, digit_values, is_all_decimal_digits, parse_digits, split_groups};

const INFO: KindInfo = KindInfo {
    name: "nl.bsn",
    country: Some("NL"),
    tag: "bsn",
    title: "Dutch citizen identification number (BSN)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("111222333", "111222333"),
    Example::valid("1112.22.333", "111222333"),
    Example::valid("10000446", "010000446"),
    Example::invalid("111222334", ValidationError::InvalidChecksum),
    Example::invalid("000000000", ValidationError::InvalidComponent),
    Example::invalid("1112223330", ValidationError::InvalidLength),
    Example::invalid("11122233X", ValidationError::InvalidFormat),
    Example::formatted("111222333", "1112.22.333"),
];

const WEIGHTS: [i64; 9] = [9, 8, 7, 6, 5, 4, 3, 2, -1];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bsn;

/// 11-proof residue of a full number; zero means valid
pub fn checksum(number: &str) -> Result<i64> {
    Ok(weighted_sum(&parse_digits(number)?, &WEIGHTS).rem_euclid(11))
}

impl Identifier for Bsn {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = clean(raw, " -.");
        if !number.is_empty() && char_len(&number) < 9 {
            format!("{:0>9}", number)
        } else {
            number
        }
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 9 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if number.bytes().all(|b| b == b'0') {
            return Err(ValidationError::InvalidComponent);
        }
        if weighted_sum(&digit_values(&number), &WEIGHTS).rem_euclid(11) != 0 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    /// `XXXX.XX.XXX`
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        split_groups(&number, &[4, 2]).join(".")
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Bsn {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        let value = weighted_sum(&digits, &WEIGHTS[..8]) % 11;
        mod11_char(value, TenRule::Invalid).map(String::from)
    }
}

identifier_functions!(Bsn, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        assert_eq!(compact("1112223"), "001112223");
        assert_eq!(compact(""), "");
        assert_eq!(compact(&compact("12")), compact("12"));
    }

    #[test]
    fn test_checksum() {
        assert_eq!(checksum("111222333"), Ok(0));
        assert_eq!(calc_check_digit("11122233"), Ok("3".to_string()));
    }

    #[test]
    fn test_residue_ten_has_no_check_digit() {
        assert_eq!(calc_check_digit("10000006"), Err(ValidationError::InvalidChecksum));
    }
}
