//! Guinean tax number (NIFp, Numéro d'Identification Fiscale Permanent).

use crate::checksum::luhn::Luhn;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, split_groups};

const INFO: KindInfo = KindInfo {
    name: "gn.nifp",
    country: Some("GN"),
    tag: "nifp",
    title: "Guinean tax number (NIFp)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("693770885", "693770885"),
    Example::valid("693-770-885", "693770885"),
    Example::invalid("693770880", ValidationError::InvalidChecksum),
    Example::invalid("69377088", ValidationError::InvalidLength),
    Example::invalid("69377088A", ValidationError::InvalidFormat),
    Example::formatted("693770885", "693-770-885"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nifp;

impl Identifier for Nifp {
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

impl CheckDigit for Nifp {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Luhn::DECIMAL.calc_check_digit(payload)
    }
}

identifier_functions!(Nifp, check_digit);
