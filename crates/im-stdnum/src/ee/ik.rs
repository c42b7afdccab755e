//! Estonian personal ID number (Isikukood).
//!
//! Eleven digits: a century/gender digit, the birth date as `YYMMDD`, a
//! three-digit serial and a check digit. The check digit uses two rounds of
//! weighted sums modulo 11; Lithuanian personal codes share the scheme.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, digit_values, is_all_decimal_digits, parse_digits, split_tail};

const INFO: KindInfo = KindInfo {
    name: "ee.ik",
    country: Some("EE"),
    tag: "ik",
    title: "Estonian personal ID number (Isikukood)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("36805280109", "36805280109"),
    Example::valid("501 0101 0016", "50101010016"),
    Example::invalid("36805280108", ValidationError::InvalidChecksum),
    Example::invalid("36813280103", ValidationError::InvalidComponent),
    Example::invalid("60202290010", ValidationError::InvalidComponent),
    Example::invalid("90000000009", ValidationError::InvalidComponent),
    Example::invalid("3680528010", ValidationError::InvalidLength),
    Example::invalid("3680528010A", ValidationError::InvalidFormat),
];

/// Sex encoded in the first digit (odd: male, even: female)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

/// Two-round weighted mod-11 check digit shared by EE and LT personal codes
pub(crate) fn personal_code_check_digit(payload: &[u32]) -> u32 {
    let round = |offset: usize| -> u32 {
        payload
            .iter()
            .enumerate()
            .map(|(i, &d)| (((i + offset) % 9) as u32 + 1) * d)
            .sum::<u32>()
            % 11
    };
    let mut check = round(0);
    if check == 10 {
        check = round(2);
    }
    check % 10
}

/// Birth date from the leading seven digits of a compact, all-digit code
pub(crate) fn personal_code_birth_date(number: &str) -> Result<NaiveDate> {
    let digits = digit_values(number);
    if digits.len() < 7 {
        return Err(ValidationError::InvalidLength);
    }
    let century = match digits[0] {
        1 | 2 => 1800,
        3 | 4 => 1900,
        5 | 6 => 2000,
        7 | 8 => 2100,
        _ => return Err(ValidationError::InvalidComponent),
    };
    let pair = |i: usize| digits[i] * 10 + digits[i + 1];
    let year = century + pair(1) as i32;
    NaiveDate::from_ymd_opt(year, pair(3), pair(5)).ok_or(ValidationError::InvalidComponent)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ik;

impl Identifier for Ik {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " ")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 11 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        personal_code_birth_date(&number)?;
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

impl CheckDigit for Ik {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        Ok(personal_code_check_digit(&parse_digits(payload)?).to_string())
    }
}

identifier_functions!(Ik, check_digit);

/// Birth date encoded in a valid code
pub fn birth_date(raw: &str) -> Result<NaiveDate> {
    personal_code_birth_date(&validate(raw)?)
}

/// Gender encoded in a valid code
pub fn gender(raw: &str) -> Result<Gender> {
    let number = validate(raw)?;
    Ok(if number.starts_with(['1', '3', '5', '7']) {
        Gender::Male
    } else {
        Gender::Female
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("3680528010"), Ok("9".to_string()));
        // First round gives ten, second round decides
        assert_eq!(calc_check_digit("5010101001"), Ok("6".to_string()));
    }

    #[test]
    fn test_birth_date_and_gender() {
        assert_eq!(
            birth_date("36805280109"),
            Ok(NaiveDate::from_ymd_opt(1968, 5, 28).unwrap())
        );
        assert_eq!(gender("36805280109"), Ok(Gender::Male));
        assert_eq!(
            birth_date("50101010016"),
            Ok(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_date_checked_before_checksum() {
        assert_eq!(validate("36813280100"), Err(ValidationError::InvalidComponent));
    }
}
