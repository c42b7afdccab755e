//! Canadian Business Number (BN).
//!
//! Nine digits with a Luhn check digit (BN9), optionally followed by a
//! two-letter program identifier and a four-digit reference (BN15), e.g.
//! `123456782RC0001`.

use crate::checksum::luhn::Luhn;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, is_all_decimal_digits, is_all_uppercase_letters, uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "ca.bn",
    country: Some("CA"),
    tag: "bn",
    title: "Canadian Business Number (BN)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("12302 6635", "123026635"),
    Example::valid("12302 6635 RC 0001", "123026635RC0001"),
    Example::valid("123456782rt0001", "123456782RT0001"),
    Example::invalid("123456783", ValidationError::InvalidChecksum),
    Example::invalid("123026635XX0001", ValidationError::InvalidComponent),
    Example::invalid("12345678Z", ValidationError::InvalidFormat),
    Example::invalid("123026635RC00A1", ValidationError::InvalidFormat),
    Example::invalid("123026635RC", ValidationError::InvalidLength),
];

/// Program identifiers: corporate income tax, import/export, payroll, GST/HST
pub const PROGRAM_CODES: [&str; 4] = ["RC", "RM", "RP", "RT"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bn;

impl Identifier for Bn {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        uppercase_if_alpha(&clean(raw, " -"))
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        let len = char_len(&number);
        if len != 9 && len != 15 {
            return Err(ValidationError::InvalidLength);
        }
        let root = number.get(..9).ok_or(ValidationError::InvalidFormat)?;
        if !is_all_decimal_digits(root) {
            return Err(ValidationError::InvalidFormat);
        }
        if len == 15 {
            // The root is ASCII, so these ranges start on char boundaries
            let program = number.get(9..11).ok_or(ValidationError::InvalidFormat)?;
            let reference = number.get(11..).ok_or(ValidationError::InvalidFormat)?;
            if !is_all_uppercase_letters(program) || !is_all_decimal_digits(reference) {
                return Err(ValidationError::InvalidFormat);
            }
            if !PROGRAM_CODES.contains(&program) {
                return Err(ValidationError::InvalidComponent);
            }
        }
        if Luhn::DECIMAL.checksum(root)? != 0 {
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

impl CheckDigit for Bn {
    /// Luhn digit for the first eight digits of the BN9 root
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Luhn::DECIMAL.calc_check_digit(payload)
    }

    /// The check digit is the ninth character, before any program suffix
    fn split<'a>(&self, compact: &'a str) -> Option<(&'a str, &'a str)> {
        Some((compact.get(..8)?, compact.get(8..9)?))
    }
}

identifier_functions!(Bn, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("12302663"), Ok("5".to_string()));
    }

    #[test]
    fn test_every_program_code() {
        for code in PROGRAM_CODES {
            assert!(is_valid(&format!("123456782{}0001", code)));
        }
    }
}
