//! ISBN (International Standard Book Number).
//!
//! ISBN-10 carries a weighted mod-11 check character (`X` for ten).
//! ISBN-13 is an EAN-13 in the `978`/`979` Bookland prefix.

use serde::Serialize;

use crate::checksum::{gtin_check_value, mod11_char, weighted_sum, TenRule};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, digit_char, is_all_decimal_digits, parse_digits, split_tail,
    uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "isbn",
    country: None,
    tag: "isbn",
    title: "ISBN (International Standard Book Number)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("0-306-40615-2", "0306406152"),
    Example::valid("0-8044-2957-x", "080442957X"),
    Example::valid("978-0-321-12521-7", "9780321125217"),
    Example::invalid("0306406153", ValidationError::InvalidChecksum),
    Example::invalid("9780321125218", ValidationError::InvalidChecksum),
    Example::invalid("9770321125217", ValidationError::InvalidComponent),
    Example::invalid("03064061X2", ValidationError::InvalidFormat),
    Example::invalid("03064061", ValidationError::InvalidLength),
    Example::formatted("9780321125217", "978-032112521-7"),
];

/// Which of the two ISBN forms a number is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IsbnType {
    Isbn10,
    Isbn13,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Isbn;

fn isbn10_check(payload: &[u32]) -> Result<char> {
    let weights: Vec<i64> = (1..=9).collect();
    mod11_char(weighted_sum(payload, &weights) % 11, TenRule::X)
}

impl Identifier for Isbn {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        uppercase_if_alpha(&clean(raw, " -"))
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        match char_len(&number) {
            10 => {
                let (payload, check) = split_tail(&number, 1);
                if !is_all_decimal_digits(payload)
                    || !(is_all_decimal_digits(check) || check == "X")
                {
                    return Err(ValidationError::InvalidFormat);
                }
            }
            13 => {
                if !is_all_decimal_digits(&number) {
                    return Err(ValidationError::InvalidFormat);
                }
                if !(number.starts_with("978") || number.starts_with("979")) {
                    return Err(ValidationError::InvalidComponent);
                }
            }
            _ => return Err(ValidationError::InvalidLength),
        }
        let (payload, check) = split_tail(&number, 1);
        if self.calc_check_digit(payload)? != check {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    /// Prefix, body and check digit joined by hyphens.
    ///
    /// Registration group boundaries are not known here, so the body is
    /// kept in one block.
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        let (body, check) = split_tail(&number, 1);
        match char_len(&number) {
            13 if number.is_ascii() => format!("{}-{}-{}", &body[..3], &body[3..], check),
            10 => format!("{}-{}", body, check),
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

impl CheckDigit for Isbn {
    /// ISBN-10 check for a 9-digit payload, ISBN-13 check for a 12-digit payload
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        match digits.len() {
            9 => isbn10_check(&digits).map(String::from),
            12 => Ok(digit_char(gtin_check_value(&digits))),
            _ => Err(ValidationError::InvalidLength),
        }
    }
}

identifier_functions!(Isbn, check_digit);

/// Whether the input is an ISBN-10 or an ISBN-13; `None` when invalid
pub fn isbn_type(raw: &str) -> Option<IsbnType> {
    match validate(raw).ok()?.len() {
        10 => Some(IsbnType::Isbn10),
        _ => Some(IsbnType::Isbn13),
    }
}

/// Convert to ISBN-13 (`978` prefix); ISBN-13 input is returned unchanged
pub fn to_isbn13(raw: &str) -> Result<String> {
    let number = validate(raw)?;
    if number.len() == 13 {
        return Ok(number);
    }
    let payload = format!("978{}", &number[..9]);
    let check = Isbn.calc_check_digit(&payload)?;
    Ok(payload + &check)
}

/// Convert to ISBN-10; only `978`-prefixed ISBN-13 numbers have one
pub fn to_isbn10(raw: &str) -> Result<String> {
    let number = validate(raw)?;
    if number.len() == 10 {
        return Ok(number);
    }
    if !number.starts_with("978") {
        return Err(ValidationError::InvalidComponent);
    }
    let payload = &number[3..12];
    let check = Isbn.calc_check_digit(payload)?;
    Ok(format!("{}{}", payload, check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("030640615"), Ok("2".to_string()));
        assert_eq!(calc_check_digit("080442957"), Ok("X".to_string()));
        assert_eq!(calc_check_digit("978032112521"), Ok("7".to_string()));
        assert_eq!(calc_check_digit("0306"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn test_isbn_type() {
        assert_eq!(isbn_type("0306406152"), Some(IsbnType::Isbn10));
        assert_eq!(isbn_type("9780306406157"), Some(IsbnType::Isbn13));
        assert_eq!(isbn_type("0306406153"), None);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(to_isbn13("0-306-40615-2"), Ok("9780306406157".to_string()));
        assert_eq!(to_isbn10("9780306406157"), Ok("0306406152".to_string()));
        assert_eq!(to_isbn10("978-0-8044-2957-3"), Ok("080442957X".to_string()));
        assert_eq!(to_isbn10("9791034500079"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn test_format() {
        assert_eq!(format("0306406152"), "030640615-2");
        assert_eq!(format("978 0 306 40615 7"), "978-030640615-7");
    }

    #[test]
    fn test_x_only_in_last_position() {
        assert_eq!(validate("X306406152"), Err(ValidationError::InvalidFormat));
    }
}
