//! Polish VAT number (NIP, Numer Identyfikacji Podatkowej).

use crate::checksum::{mod11_char, weighted_sum, TenRule};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, is_all_decimal_digits, parse_digits, split_groups, split_tail,
    strip_country_prefix, uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "pl.nip",
    country: Some("PL"),
    tag: "nip",
    title: "Polish VAT number (NIP)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("PL 8567346215", "8567346215"),
    Example::valid("123-456-32-18", "1234563218"),
    Example::invalid("PL 8567346216", ValidationError::InvalidChecksum),
    Example::invalid("856734621", ValidationError::InvalidLength),
    Example::invalid("856734621X", ValidationError::InvalidFormat),
    Example::formatted("8567346215", "856-734-62-15"),
];

const WEIGHTS: [i64; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nip;

impl Identifier for Nip {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = uppercase_if_alpha(&clean(raw, " -"));
        strip_country_prefix(&number, "PL").to_string()
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

    /// `XXX-XXX-XX-XX`
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        split_groups(&number, &[3, 3, 2]).join("-")
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Nip {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        mod11_char(weighted_sum(&digits, &WEIGHTS) % 11, TenRule::Invalid).map(String::from)
    }
}

identifier_functions!(Nip, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_ten_has_no_check_digit() {
        assert_eq!(calc_check_digit("100000016"), Err(ValidationError::InvalidChecksum));
        assert_eq!(calc_check_digit("856734621"), Ok("5".to_string()));
    }
}
