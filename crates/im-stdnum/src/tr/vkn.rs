//! Turkish tax identification number (VKN, Vergi Kimlik Numarası).
//!
//! Ten digits. The check digit comes from a per-position recurrence over
//! the first nine digits, read from the right.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, parse_digits, split_tail};

const INFO: KindInfo = KindInfo {
    name: "tr.vkn",
    country: Some("TR"),
    tag: "vkn",
    title: "Turkish tax identification number (VKN)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("4540536920", "4540536920"),
    Example::valid("123 456 7890", "1234567890"),
    Example::invalid("4540536921", ValidationError::InvalidChecksum),
    Example::invalid("454053692", ValidationError::InvalidLength),
    Example::invalid("454053692A", ValidationError::InvalidFormat),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vkn;

impl Identifier for Vkn {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " ")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 10 {
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

impl CheckDigit for Vkn {
    /// Check digit over (at most) the first nine digits of `payload`
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        let head = &digits[..digits.len().min(9)];
        let sum: u32 = head
            .iter()
            .rev()
            .zip(1u32..)
            .filter_map(|(&d, i)| {
                let c1 = (d + i) % 10;
                (c1 != 0).then(|| match (c1 * (1 << i)) % 9 {
                    0 => 9,
                    c2 => c2,
                })
            })
            .sum();
        Ok(((10 - sum % 10) % 10).to_string())
    }
}

identifier_functions!(Vkn, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("454053692"), Ok("0".to_string()));
        assert_eq!(calc_check_digit("123456789"), Ok("0".to_string()));
    }
}
