//! Colombian tax number (NIT, Número de Identificación Tributaria).
//!
//! Eight to sixteen digits, the last a check digit computed with prime
//! weights over the reversed payload, modulo 11, through a lookup table.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, group_from_right, is_all_decimal_digits, parse_digits, split_tail,
};

const INFO: KindInfo = KindInfo {
    name: "co.nit",
    country: Some("CO"),
    tag: "nit",
    title: "Colombian tax number (NIT)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("213.123.432-1", "2131234321"),
    Example::valid("860.012.336-1-6", "86001233616"),
    Example::invalid("2131234325", ValidationError::InvalidChecksum),
    Example::invalid("2131234", ValidationError::InvalidLength),
    Example::invalid("213123432X", ValidationError::InvalidFormat),
    Example::formatted("2131234321", "213.123.432-1"),
];

const WEIGHTS: [u32; 15] = [3, 7, 13, 17, 19, 23, 29, 37, 41, 43, 47, 53, 59, 67, 71];

/// Check digit indexed by the weighted sum modulo 11
const CHECK_DIGITS: &str = "01987654321";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nit;

impl Identifier for Nit {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, ".,- ")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if !(8..=16).contains(&char_len(&number)) {
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

    /// `XXX.XXX.XXX-C`, thousands groups counted from the right
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        if number.is_empty() {
            return number;
        }
        let (payload, check) = split_tail(&number, 1);
        format!("{}-{}", group_from_right(payload, 3, "."), check)
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Nit {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        if digits.len() > WEIGHTS.len() {
            return Err(ValidationError::InvalidLength);
        }
        let sum: u32 = digits.iter().rev().zip(WEIGHTS).map(|(d, w)| d * w).sum();
        CHECK_DIGITS
            .chars()
            .nth((sum % 11) as usize)
            .map(String::from)
            .ok_or(ValidationError::InvalidChecksum)
    }
}

identifier_functions!(Nit, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("213123432"), Ok("1".to_string()));
        assert_eq!(calc_check_digit("8600123361"), Ok("6".to_string()));
        assert_eq!(calc_check_digit("1234567890123456"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn test_format() {
        assert_eq!(format("8600123361 6"), "8.600.123.361-6");
        assert_eq!(format(""), "");
    }
}
