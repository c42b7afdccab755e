//! Chilean national tax number (RUT, Rol Único Tributario).
//!
//! Seven or eight digits and a check character from `0123456789K`.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, group_from_right, is_all_decimal_digits, is_all_of, parse_digits, split_tail,
    strip_country_prefix, uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "cl.rut",
    country: Some("CL"),
    tag: "rut",
    title: "Chilean national tax number (RUT)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("76086428-5", "760864285"),
    Example::valid("CL 12531909-2", "125319092"),
    Example::valid("10.000.013-k", "10000013K"),
    Example::invalid("12531909-3", ValidationError::InvalidChecksum),
    Example::invalid("76086A28-5", ValidationError::InvalidFormat),
    Example::invalid("1253190", ValidationError::InvalidLength),
    Example::formatted("125319092", "12.531.909-2"),
];

const CHECK_CHARS: &str = "0123456789K";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rut;

impl Identifier for Rut {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = uppercase_if_alpha(&clean(raw, " -."));
        strip_country_prefix(&number, "CL").to_string()
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if !matches!(char_len(&number), 8 | 9) {
            return Err(ValidationError::InvalidLength);
        }
        let (payload, check) = split_tail(&number, 1);
        if !is_all_decimal_digits(payload) || !is_all_of(check, CHECK_CHARS) {
            return Err(ValidationError::InvalidFormat);
        }
        if self.calc_check_digit(payload)? != check {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    /// `XX.XXX.XXX-C`
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        if number.is_empty() {
            return number;
        }
        let (payload, check) = split_tail(&number, 1);
        format!("{}-{}", group_from_right(payload, 3, "."), check)
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Rut {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let sum: u32 = parse_digits(payload)?
            .iter()
            .rev()
            .enumerate()
            .map(|(i, d)| d * (9 - (i as u32 % 6)))
            .sum();
        CHECK_CHARS
            .chars()
            .nth((sum % 11) as usize)
            .map(String::from)
            .ok_or(ValidationError::InvalidChecksum)
    }
}

identifier_functions!(Rut, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("76086428"), Ok("5".to_string()));
        assert_eq!(calc_check_digit("12531909"), Ok("2".to_string()));
        assert_eq!(calc_check_digit("10000013"), Ok("K".to_string()));
    }

    #[test]
    fn test_format() {
        assert_eq!(format("760864285"), "76.086.428-5");
    }
}
