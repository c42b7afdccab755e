//! French company identification number (SIREN).

use crate::checksum::luhn::Luhn;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, split_groups};

const INFO: KindInfo = KindInfo {
    name: "fr.siren",
    country: Some("FR"),
    tag: "siren",
    title: "French company identification number (SIREN)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("552 008 443", "552008443"),
    Example::valid("732829320", "732829320"),
    Example::invalid("552008442", ValidationError::InvalidChecksum),
    Example::invalid("55200844", ValidationError::InvalidLength),
    Example::invalid("55200844X", ValidationError::InvalidFormat),
    Example::formatted("552008443", "552 008 443"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Siren;

impl Identifier for Siren {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " .")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 9 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if Luhn::DECIMAL.checksum(&number)? != 0 {
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

impl CheckDigit for Siren {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Luhn::DECIMAL.calc_check_digit(payload)
    }
}

identifier_functions!(Siren, check_digit);
