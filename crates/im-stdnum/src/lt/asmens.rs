//! Lithuanian personal number (Asmens kodas).
//!
//! Same layout and check digit as the Estonian Isikukood. A leading `9`
//! marks a placeholder code whose date digits carry no meaning.

use chrono::NaiveDate;

use crate::ee::ik::{personal_code_birth_date, personal_code_check_digit};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, parse_digits, split_tail};

const INFO: KindInfo = KindInfo {
    name: "lt.asmens",
    country: Some("LT"),
    tag: "asmens",
    title: "Lithuanian personal number (Asmens kodas)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("33309240064", "33309240064"),
    Example::valid("90000000009", "90000000009"),
    Example::invalid("33309240164", ValidationError::InvalidChecksum),
    Example::invalid("49913120000", ValidationError::InvalidComponent),
    Example::invalid("3330924006", ValidationError::InvalidLength),
    Example::invalid("3330924006X", ValidationError::InvalidFormat),
];

/// Asmens kodas validator.
///
/// The birth-date check can be switched off for data sets known to carry
/// administratively issued codes with impossible dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asmens {
    pub validate_birth_date: bool,
}

impl Asmens {
    pub const DEFAULT: Asmens = Asmens {
        validate_birth_date: true,
    };

    pub fn new(validate_birth_date: bool) -> Self {
        Self {
            validate_birth_date,
        }
    }
}

impl Default for Asmens {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Identifier for Asmens {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 11 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if self.validate_birth_date && !number.starts_with('9') {
            personal_code_birth_date(&number)?;
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
        if self.validate_birth_date {
            EXAMPLES
        } else {
            &[]
        }
    }
}

impl CheckDigit for Asmens {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Ok(personal_code_check_digit(&parse_digits(payload)?).to_string())
    }
}

identifier_functions!(Asmens::DEFAULT, check_digit);

/// Birth date of a valid code; placeholder codes (leading `9`) have none
pub fn birth_date(raw: &str) -> Result<NaiveDate> {
    let number = validate(raw)?;
    if number.starts_with('9') {
        return Err(ValidationError::InvalidComponent);
    }
    personal_code_birth_date(&number)
}
