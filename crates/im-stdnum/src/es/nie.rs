//! Spanish foreigner identity code (NIE, Número de Identificación de Extranjero).
//!
//! `X`, `Y` or `Z`, seven digits and a check letter. The leading letter
//! stands for `0`, `1` or `2` when the DNI check letter is computed.

use crate::error::{Result, ValidationError};
use crate::es::dni::check_letter;
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{
    char_len, clean, is_all_decimal_digits, is_all_uppercase_letters, uppercase_if_alpha,
};

const INFO: KindInfo = KindInfo {
    name: "es.nie",
    country: Some("ES"),
    tag: "nie",
    title: "Spanish foreigner identity code (NIE)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("x-2482300w", "X2482300W"),
    Example::valid("Y2482300Q", "Y2482300Q"),
    Example::invalid("x-2482300a", ValidationError::InvalidChecksum),
    Example::invalid("X2482300", ValidationError::InvalidLength),
    Example::invalid("A2482300W", ValidationError::InvalidFormat),
];

const PREFIXES: &str = "XYZ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nie;

impl Identifier for Nie {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        uppercase_if_alpha(&clean(raw, " -"))
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 9 {
            return Err(ValidationError::InvalidLength);
        }
        let well_formed = number
            .get(..1)
            .is_some_and(|p| PREFIXES.contains(p))
            && number.get(1..8).is_some_and(is_all_decimal_digits)
            && number.get(8..).is_some_and(is_all_uppercase_letters);
        if !well_formed {
            return Err(ValidationError::InvalidFormat);
        }
        if self.calc_check_digit(&number[..8])? != number[8..] {
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

impl CheckDigit for Nie {
    /// Check letter for a payload such as `X2482300`
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let mut chars = payload.chars();
        let prefix = chars
            .next()
            .and_then(|c| PREFIXES.find(c))
            .ok_or(ValidationError::InvalidFormat)?;
        check_letter(&format!("{}{}", prefix, chars.as_str()))
    }
}

identifier_functions!(Nie, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("X2482300"), Ok("W".to_string()));
        assert_eq!(calc_check_digit("Y2482300"), Ok("Q".to_string()));
        assert_eq!(calc_check_digit("2482300"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_dni_is_not_a_nie() {
        assert_eq!(validate("54362315K"), Err(ValidationError::InvalidFormat));
    }
}
