//! US bank routing transit number (RTN, ABA routing number).
//!
//! Nine digits; weights 3,7,1 repeated over all nine digits must give a
//! multiple of 10.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, parse_digits, split_tail};

const INFO: KindInfo = KindInfo {
    name: "us.rtn",
    country: Some("US"),
    tag: "rtn",
    title: "US routing transit number (RTN)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("111000025", "111000025"),
    Example::valid("1110-0002-5", "111000025"),
    Example::invalid("112000025", ValidationError::InvalidChecksum),
    Example::invalid("11100002", ValidationError::InvalidLength),
    Example::invalid("11100002X", ValidationError::InvalidFormat),
];

const WEIGHTS: [u32; 8] = [7, 3, 9, 7, 3, 9, 7, 3];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rtn;

impl Identifier for Rtn {
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

impl CheckDigit for Rtn {
    /// Check digit for the first eight digits
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        if digits.len() != WEIGHTS.len() {
            return Err(ValidationError::InvalidLength);
        }
        let sum: u32 = digits.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
        Ok((sum % 10).to_string())
    }
}

identifier_functions!(Rtn, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("11100002"), Ok("5".to_string()));
        assert_eq!(calc_check_digit("1110000"), Err(ValidationError::InvalidLength));
    }
}
