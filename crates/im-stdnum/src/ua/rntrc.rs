//! Ukrainian individual taxpayer registration number (РНОКПП, RNTRC).
//!
//! Ten digits. Signed weights over the first nine digits, modulo 11 and
//! then modulo 10, give the check digit.

use crate::checksum::weighted_sum;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, parse_digits, split_tail};

const INFO: KindInfo = KindInfo {
    name: "ua.rntrc",
    country: Some("UA"),
    tag: "rntrc",
    title: "Ukrainian individual taxpayer number (RNTRC)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("1759013776", "1759013776"),
    Example::valid(" 1234567899 ", "1234567899"),
    Example::invalid("1759013770", ValidationError::InvalidChecksum),
    Example::invalid("12345", ValidationError::InvalidLength),
    Example::invalid("175901377A", ValidationError::InvalidFormat),
];

const WEIGHTS: [i64; 9] = [-1, 5, 7, 9, 4, 6, 10, 5, 7];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rntrc;

impl Identifier for Rntrc {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " ")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 10 {
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

impl CheckDigit for Rntrc {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        let value = weighted_sum(&digits, &WEIGHTS).rem_euclid(11) % 10;
        Ok(value.to_string())
    }
}

identifier_functions!(Rntrc, check_digit);
