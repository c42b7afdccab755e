//! Norwegian organisation number (Organisasjonsnummer).
//!
//! Nine digits; the weighted sum of all nine, including the check digit,
//! must be a multiple of 11.

use crate::checksum::{mod11_char, weighted_sum, TenRule};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, digit_values, is_all_decimal_digits, parse_digits, split_groups};

const INFO: KindInfo = KindInfo {
    name: "no.orgnr",
    country: Some("NO"),
    tag: "orgnr",
    title: "Norwegian organisation number",
};

const EXAMPLES: &[Example] = &[
    Example::valid("988 077 917", "988077917"),
    Example::invalid("988 077 918", ValidationError::InvalidChecksum),
    Example::invalid("98807791", ValidationError::InvalidLength),
    Example::invalid("98807791A", ValidationError::InvalidFormat),
    Example::formatted("988077917", "988 077 917"),
];

const WEIGHTS: [i64; 9] = [3, 2, 7, 6, 5, 4, 3, 2, 1];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orgnr;

/// Weighted sum of all nine digits modulo 11; zero means valid
pub fn checksum(number: &str) -> Result<i64> {
    Ok(weighted_sum(&parse_digits(number)?, &WEIGHTS) % 11)
}

impl Identifier for Orgnr {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " ")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 9 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if weighted_sum(&digit_values(&number), &WEIGHTS) % 11 != 0 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        split_groups(&number, &[3, 3]).join(" ")
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Orgnr {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        let value = (11 - weighted_sum(&digits, &WEIGHTS[..8]) % 11) % 11;
        mod11_char(value, TenRule::Invalid).map(String::from)
    }
}

identifier_functions!(Orgnr, check_digit);
