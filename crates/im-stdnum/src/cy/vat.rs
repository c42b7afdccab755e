//! Cypriot VAT number (Αριθμός Εγγραφής Φ.Π.Α.).
//!
//! Eight digits and a check letter. Digits in even positions are
//! translated through a fixed table, the total modulo 26 picks the letter.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, is_all_decimal_digits, is_all_uppercase_letters, parse_digits, split_tail,
    strip_country_prefix, uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "cy.vat",
    country: Some("CY"),
    tag: "vat",
    title: "Cypriot VAT number",
};

const EXAMPLES: &[Example] = &[
    Example::valid("CY-10259033P", "10259033P"),
    Example::valid("cy 00532445 o", "00532445O"),
    Example::invalid("CY-10259033Z", ValidationError::InvalidChecksum),
    Example::invalid("12000139V", ValidationError::InvalidComponent),
    Example::invalid("1025903P", ValidationError::InvalidLength),
    Example::invalid("102590331", ValidationError::InvalidFormat),
];

/// Values substituted for digits in even (0-based) positions
const EVEN_POSITION_VALUES: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vat;

impl Identifier for Vat {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = uppercase_if_alpha(&clean(raw, " -"));
        strip_country_prefix(&number, "CY").to_string()
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
        if payload.starts_with("12") {
            return Err(ValidationError::InvalidComponent);
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

impl CheckDigit for Vat {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let sum: u32 = parse_digits(payload)?
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                if i % 2 == 0 {
                    EVEN_POSITION_VALUES[d as usize]
                } else {
                    d
                }
            })
            .sum();
        LETTERS
            .chars()
            .nth((sum % 26) as usize)
            .map(String::from)
            .ok_or(ValidationError::InvalidChecksum)
    }
}

identifier_functions!(Vat, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("10259033"), Ok("P".to_string()));
        assert_eq!(calc_check_digit("00532445"), Ok("O".to_string()));
    }

    #[test]
    fn test_prefix_twelve_reported_before_checksum() {
        // 12000139V has a correct check letter but a forbidden prefix
        assert_eq!(calc_check_digit("12000139"), Ok("V".to_string()));
        assert_eq!(validate("12000139A"), Err(ValidationError::InvalidComponent));
    }
}
