//! IMEI (International Mobile Equipment Identity).
//!
//! 14 digits (no check digit), 15 digits (Luhn check digit) or 16 digits
//! (IMEISV, two-digit software version instead of the check digit).

use crate::checksum::luhn::Luhn;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, split_groups, split_tail};

const INFO: KindInfo = KindInfo {
    name: "imei",
    country: None,
    tag: "imei",
    title: "IMEI (International Mobile Equipment Identity)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("35686800-004141-20", "3568680000414120"),
    Example::valid("35-209900-176148-1", "352099001761481"),
    Example::valid("35686800004141", "35686800004141"),
    Example::invalid("35-209900-176148-2", ValidationError::InvalidChecksum),
    Example::invalid("3520990017614", ValidationError::InvalidLength),
    Example::invalid("35209900176148A", ValidationError::InvalidFormat),
    Example::formatted("352099001761481", "35-209900-176148-1"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Imei;

/// Parts of an IMEI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImeiParts {
    /// Type Allocation Code (8 digits)
    pub tac: String,
    /// Serial number (6 digits)
    pub serial: String,
    /// Check digit, software version, or empty for 14-digit numbers
    pub suffix: String,
}

impl Identifier for Imei {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if !matches!(char_len(&number), 14..=16) {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if number.len() == 15 && Luhn::DECIMAL.checksum(&number)? != 0 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    /// `AA-BBBBBB-CCCCCC-D`: reporting body, type, serial, check or version
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        split_groups(&number, &[2, 6, 6]).join("-")
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Imei {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Luhn::DECIMAL.calc_check_digit(payload)
    }

    /// Only the 15-digit form carries a check digit
    fn split<'a>(&self, compact: &'a str) -> Option<(&'a str, &'a str)> {
        if compact.len() != 15 {
            return None;
        }
        Some(split_tail(compact, 1))
    }
}

identifier_functions!(Imei, check_digit);

/// Split a valid IMEI into TAC, serial number and check digit / software version
pub fn split(raw: &str) -> Result<ImeiParts> {
    let number = validate(raw)?;
    Ok(ImeiParts {
        tac: number[..8].to_string(),
        serial: number[8..14].to_string(),
        suffix: number[14..].to_string(),
    })
}

/// Software version of an IMEISV, if present
pub fn software_version(raw: &str) -> Result<Option<String>> {
    let number = validate(raw)?;
    Ok((number.len() == 16).then(|| number[14..].to_string()))
}
