//! Swiss business identifier (UID, Unternehmens-Identifikationsnummer).
//!
//! `CHE` followed by eight digits and a weighted mod-11 check digit.

use crate::checksum::{mod11_char, weighted_sum, TenRule};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, is_all_decimal_digits, parse_digits, split_groups, split_tail,
    uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "ch.uid",
    country: Some("CH"),
    tag: "uid",
    title: "Swiss business identifier (UID)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("CHE-100.155.212", "CHE100155212"),
    Example::valid("che 116.116.241", "CHE116116241"),
    Example::invalid("CHE-100.155.213", ValidationError::InvalidChecksum),
    Example::invalid("CHE-100.155.21", ValidationError::InvalidLength),
    Example::invalid("ADM-100.155.212", ValidationError::InvalidComponent),
    Example::invalid("CHE-100.15A.212", ValidationError::InvalidFormat),
    Example::formatted("CHE100155212", "CHE-100.155.212"),
];

const WEIGHTS: [i64; 8] = [5, 4, 3, 2, 7, 6, 5, 4];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uid;

impl Identifier for Uid {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        uppercase_if_alpha(&clean(raw, " -."))
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 12 {
            return Err(ValidationError::InvalidLength);
        }
        let (prefix, digits) = match (number.get(..3), number.get(3..)) {
            (Some(prefix), Some(digits)) => (prefix, digits),
            _ => return Err(ValidationError::InvalidFormat),
        };
        if !is_all_decimal_digits(digits) {
            return Err(ValidationError::InvalidFormat);
        }
        if prefix != "CHE" {
            return Err(ValidationError::InvalidComponent);
        }
        let (payload, check) = split_tail(digits, 1);
        if self.calc_check_digit(payload)? != check {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        let groups = split_groups(&number, &[3, 3, 3, 3]);
        match groups.split_first() {
            Some((prefix, rest)) if !rest.is_empty() => format!("{}-{}", prefix, rest.join(".")),
            _ => number,
        }
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Uid {
    /// Check digit for the eight digits after `CHE`
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        let value = (11 - weighted_sum(&digits, &WEIGHTS) % 11) % 11;
        mod11_char(value, TenRule::Invalid).map(String::from)
    }

    /// The payload excludes the `CHE` prefix
    fn split<'a>(&self, compact: &'a str) -> Option<(&'a str, &'a str)> {
        let digits = compact.strip_prefix("CHE")?;
        if digits.len() != 9 || !digits.is_ascii() {
            return None;
        }
        Some(digits.split_at(8))
    }
}

identifier_functions!(Uid, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("10015521"), Ok("2".to_string()));
        assert_eq!(calc_check_digit("11611624"), Ok("1".to_string()));
    }

    #[test]
    fn test_residue_ten_has_no_check_digit() {
        assert_eq!(calc_check_digit("10000016"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn test_non_ascii_prefix() {
        assert_eq!(validate("CHÉ100155212"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("CHÉ10015521"), Err(ValidationError::InvalidLength));
    }
}
