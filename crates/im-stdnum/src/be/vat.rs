//! Belgian enterprise / VAT number (BTW, TVA, USt).
//!
//! Ten digits starting with `0` or `1`; older nine-digit numbers get a
//! leading zero. The first eight digits plus the last two must be a
//! multiple of 97.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, group_from_right, is_all_decimal_digits, parse_digits, split_tail,
    strip_country_prefix, uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "be.vat",
    country: Some("BE"),
    tag: "vat",
    title: "Belgian VAT number",
};

const EXAMPLES: &[Example] = &[
    Example::valid("BE403019261", "0403019261"),
    Example::valid("BE 428759497", "0428759497"),
    Example::valid("BE (0)403.019.261", "0403019261"),
    Example::valid("0000009700", "0000009700"),
    Example::valid("0000009797", "0000009797"),
    Example::invalid("BE431150351", ValidationError::InvalidChecksum),
    Example::invalid("2403019261", ValidationError::InvalidComponent),
    Example::invalid("0000000000", ValidationError::InvalidComponent),
    Example::invalid("04030192611", ValidationError::InvalidLength),
    Example::invalid("040301926A", ValidationError::InvalidFormat),
    Example::formatted("403019261", "0403.019.261"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vat;

impl Identifier for Vat {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = uppercase_if_alpha(&clean(raw, " -./"));
        let number = strip_country_prefix(&number, "BE");
        let mut number = match number.strip_prefix("(0)") {
            Some(rest) => format!("0{}", rest),
            None => number.to_string(),
        };
        if char_len(&number) == 9 {
            number.insert(0, '0');
        }
        number
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 10 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if !(number.starts_with('0') || number.starts_with('1')) {
            return Err(ValidationError::InvalidComponent);
        }
        if number.bytes().all(|b| b == b'0') {
            return Err(ValidationError::InvalidComponent);
        }
        let (payload, check) = split_tail(&number, 2);
        if !self.is_check_digit(payload, check) {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    /// `0NNN.NNN.NNN`
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        match (number.get(..4), number.get(4..)) {
            (Some(head), Some(tail)) if !tail.is_empty() => {
                format!("{}.{}", head, group_from_right(tail, 3, "."))
            }
            _ => number,
        }
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

fn mod_97(digits: &str) -> Result<u32> {
    Ok(parse_digits(digits)?
        .into_iter()
        .fold(0u32, |acc, d| (acc * 10 + d) % 97))
}

impl CheckDigit for Vat {
    /// `97 - payload mod 97`, as two digits
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Ok(format!("{:02}", 97 - mod_97(payload)?))
    }

    fn check_digit_len(&self) -> usize {
        2
    }

    /// A payload that is a multiple of 97 accepts both `00` and `97`
    fn is_check_digit(&self, payload: &str, check: &str) -> bool {
        if char_len(check) != 2 {
            return false;
        }
        match (mod_97(payload), mod_97(check)) {
            (Ok(remainder), Ok(check)) => (remainder + check) % 97 == 0,
            _ => false,
        }
    }
}

identifier_functions!(Vat, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact() {
        assert_eq!(compact("BE403019261"), "0403019261");
        assert_eq!(compact("be 0403.019.261"), "0403019261");
        assert_eq!(compact("(0)403019261"), "0403019261");
    }

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("04030192"), Ok("61".to_string()));
        assert_eq!(calc_check_digit("00000000"), Ok("97".to_string()));
    }

    #[test]
    fn test_multiple_of_97_accepts_both_check_pairs() {
        assert_eq!(validate("0000009700"), Ok("0000009700".to_string()));
        assert_eq!(validate("BE 0000.009.797"), Ok("0000009797".to_string()));
        assert_eq!(validate("0000009701"), Err(ValidationError::InvalidChecksum));
        assert!(Vat.is_check_digit("00000097", "00"));
        assert!(Vat.is_check_digit("00000097", "97"));
        assert!(!Vat.is_check_digit("00000097", "0"));
        assert!(!Vat.is_check_digit("04030192", "6é"));
    }

    #[test]
    fn test_non_ascii_length_counts_characters() {
        // Nine characters, ten bytes: padded to ten, then rejected on format
        assert_eq!(validate("40301926é"), Err(ValidationError::InvalidFormat));
        // Ten characters, eleven bytes
        assert_eq!(validate("040301926é"), Err(ValidationError::InvalidFormat));
        // Eleven characters
        assert_eq!(validate("0403019261é"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn test_format_short_input() {
        assert_eq!(format("12"), "12");
    }
}
