//! Canadian Social Insurance Number (SIN, NAS).
//!
//! Nine digits with a Luhn check digit. Numbers starting with `0` are never
//! issued and `8` is reserved for business numbers.

use crate::checksum::luhn::Luhn;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, split_groups};

const INFO: KindInfo = KindInfo {
    name: "ca.sin",
    country: Some("CA"),
    tag: "sin",
    title: "Canadian Social Insurance Number (SIN)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("123-456-782", "123456782"),
    Example::invalid("123-456-783", ValidationError::InvalidChecksum),
    Example::invalid("046-454-286", ValidationError::InvalidComponent),
    Example::invalid("812-345-676", ValidationError::InvalidComponent),
    Example::invalid("12345678", ValidationError::InvalidLength),
    Example::invalid("12345678Z", ValidationError::InvalidFormat),
    Example::formatted("123456782", "123-456-782"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sin;

impl Identifier for Sin {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 9 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if number.starts_with('0') || number.starts_with('8') {
            return Err(ValidationError::InvalidComponent);
        }
        if Luhn::DECIMAL.checksum(&number)? != 0 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        split_groups(&number, &[3, 3]).join("-")
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Sin {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Luhn::DECIMAL.calc_check_digit(payload)
    }
}

identifier_functions!(Sin, check_digit);
