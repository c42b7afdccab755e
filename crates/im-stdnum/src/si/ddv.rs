//! Slovenian VAT number (ID za DDV, Davčna številka).
//!
//! Eight digits, the first non-zero. The check digit is
//! `11 - (weighted sum mod 11)` with weights 8 down to 2. Payloads for which
//! that value is 10 or 11 have no valid check digit.

use crate::checksum::weighted_sum;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, is_all_decimal_digits, parse_digits, split_tail, strip_country_prefix,
    uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "si.ddv",
    country: Some("SI"),
    tag: "ddv",
    title: "Slovenian VAT number (ID za DDV)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("SI 5022 3704", "50223704"),
    Example::valid("SI15643425", "15643425"),
    Example::valid("10000011", "10000011"),
    Example::invalid("SI 5022 3700", ValidationError::InvalidChecksum),
    // Check values 10 and 11: no digit can satisfy them
    Example::invalid("10000020", ValidationError::InvalidChecksum),
    Example::invalid("10000070", ValidationError::InvalidChecksum),
    Example::invalid("05022370", ValidationError::InvalidFormat),
    Example::invalid("5022370", ValidationError::InvalidLength),
];

const WEIGHTS: [i64; 7] = [8, 7, 6, 5, 4, 3, 2];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ddv;

impl Identifier for Ddv {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = uppercase_if_alpha(&clean(raw, " -"));
        strip_country_prefix(&number, "SI").to_string()
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 8 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) || number.starts_with('0') {
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

impl CheckDigit for Ddv {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        let value = 11 - weighted_sum(&digits, &WEIGHTS) % 11;
        if value >= 10 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(value.to_string())
    }
}

identifier_functions!(Ddv, check_digit);
