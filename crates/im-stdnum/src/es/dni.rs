//! Spanish personal identity code (DNI, Documento Nacional de Identidad).
//!
//! Eight digits and a check letter: the number modulo 23 indexes
//! [`CHECK_LETTERS`].

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, is_all_decimal_digits, is_all_uppercase_letters, parse_digits, split_tail,
    uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "es.dni",
    country: Some("ES"),
    tag: "dni",
    title: "Spanish personal identity code (DNI)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("54362315-K", "54362315K"),
    Example::valid("54362315k", "54362315K"),
    Example::invalid("54362315Z", ValidationError::InvalidChecksum),
    Example::invalid("54362315", ValidationError::InvalidLength),
    Example::invalid("54362315.", ValidationError::InvalidFormat),
    Example::invalid("5436231AK", ValidationError::InvalidFormat),
];

/// Check letters indexed by the number modulo 23
pub const CHECK_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";

/// Check letter for a decimal number of any length
pub(crate) fn check_letter(payload: &str) -> Result<String> {
    let remainder = parse_digits(payload)?
        .into_iter()
        .fold(0u32, |acc, d| (acc * 10 + d) % 23);
    CHECK_LETTERS
        .chars()
        .nth(remainder as usize)
        .map(String::from)
        .ok_or(ValidationError::InvalidChecksum)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dni;

impl Identifier for Dni {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        uppercase_if_alpha(&clean(raw, " -"))
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 9 {
            return Err(ValidationError::InvalidLength);
        }
        let (payload, check) = split_tail(&number, 1);
        if !is_all_decimal_digits(payload) || !is_all_uppercase_letters(check) {
            return Err(ValidationError::InvalidFormat);
        }
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

impl CheckDigit for Dni {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        check_letter(payload)
    }
}

identifier_functions!(Dni, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("54362315"), Ok("K".to_string()));
        assert_eq!(calc_check_digit("12345678"), Ok("Z".to_string()));
        assert_eq!(calc_check_digit("1234567A"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_long_payload_does_not_overflow() {
        assert!(calc_check_digit("99999999999999999999999999").is_ok());
    }
}
