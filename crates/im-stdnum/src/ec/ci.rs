//! Ecuadorian personal identity code (CI, Cédula de identidad).
//!
//! Ten digits: a two-digit province code, a third digit below 7, and a
//! check digit. Weights alternate 2,1 from the left; doubled values above
//! nine are folded by subtracting nine.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, digit_values, is_all_decimal_digits, parse_digits, split_tail};

const INFO: KindInfo = KindInfo {
    name: "ec.ci",
    country: Some("EC"),
    tag: "ci",
    title: "Ecuadorian personal identity code (CI)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("171430710-3", "1714307103"),
    Example::valid("0901010025", "0901010025"),
    Example::valid("3000000004", "3000000004"),
    Example::invalid("1714307104", ValidationError::InvalidChecksum),
    Example::invalid("2500000001", ValidationError::InvalidComponent),
    Example::invalid("1774307100", ValidationError::InvalidComponent),
    Example::invalid("171430710", ValidationError::InvalidLength),
    Example::invalid("171430710A", ValidationError::InvalidFormat),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ci;

/// Folded weighted sum modulo 10; zero means valid for a full number
pub fn checksum(number: &str) -> Result<u32> {
    let sum: u32 = parse_digits(number)?
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            let value = if i % 2 == 0 { d * 2 } else { d };
            if value > 9 {
                value - 9
            } else {
                value
            }
        })
        .sum();
    Ok(sum % 10)
}

fn is_known_province(code: u32) -> bool {
    matches!(code, 1..=24 | 30 | 50)
}

impl Identifier for Ci {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 10 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        let digits = digit_values(&number);
        if !is_known_province(digits[0] * 10 + digits[1]) || digits[2] > 6 {
            return Err(ValidationError::InvalidComponent);
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

impl CheckDigit for Ci {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Ok(((10 - checksum(payload)?) % 10).to_string())
    }
}

identifier_functions!(Ci, check_digit);
