//! Luhn mod-N checksum.
//!
//! Every second character from the right is doubled; a doubled value is
//! reduced by adding its base-N digits. The number is valid when the total
//! is a multiple of N. With the decimal alphabet this is the classic Luhn
//! (mod 10) algorithm used by card numbers, IMEI and many tax IDs.

use crate::checksum::{Alphabet, DIGITS};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::clean;

const INFO: KindInfo = KindInfo {
    name: "luhn",
    country: None,
    tag: "luhn",
    title: "Luhn mod N",
};

const EXAMPLES: &[Example] = &[
    Example::valid("78949", "78949"),
    Example::valid("4111 1111 1111 1111", "4111111111111111"),
    Example::invalid("7894", ValidationError::InvalidChecksum),
    Example::invalid("78a49", ValidationError::InvalidFormat),
    Example::invalid("", ValidationError::InvalidLength),
];

/// Luhn engine over an alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Luhn {
    alphabet: Alphabet,
}

impl Luhn {
    /// Decimal Luhn (mod 10)
    pub const DECIMAL: Luhn = Luhn { alphabet: DIGITS };

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Luhn checksum of a full number; zero means valid
    pub fn checksum(&self, number: &str) -> Result<u32> {
        let n = self.alphabet.len();
        let values = self.alphabet.values(number)?;
        let total: u32 = values
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &v)| {
                if i % 2 == 0 {
                    v
                } else {
                    let doubled = v * 2;
                    doubled / n + doubled % n
                }
            })
            .sum();
        Ok(total % n)
    }
}

impl Default for Luhn {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl Identifier for Luhn {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        self.alphabet.fold_case(&clean(raw, " -"))
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if number.is_empty() {
            return Err(ValidationError::InvalidLength);
        }
        if self.checksum(&number)? != 0 {
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

impl CheckDigit for Luhn {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let n = self.alphabet.len();
        // Values are checked first so a foreign character is never mistaken for padding
        self.alphabet.values(payload)?;
        let zero = self.alphabet.symbol(0).ok_or(ValidationError::InvalidFormat)?;
        let mut padded = payload.to_string();
        padded.push(zero);
        let sum = self.checksum(&padded)?;
        self.alphabet
            .symbol((n - sum) % n)
            .map(String::from)
            .ok_or(ValidationError::InvalidChecksum)
    }
}

identifier_functions!(Luhn::DECIMAL, check_digit);

/// Decimal Luhn checksum of a number; zero means valid
pub fn checksum(number: &str) -> Result<u32> {
    Luhn::DECIMAL.checksum(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_luhn() {
        assert_eq!(checksum("7894"), Ok(6));
        assert_eq!(calc_check_digit("7894"), Ok("9".to_string()));
        assert_eq!(checksum("78949"), Ok(0));
        assert!(is_valid("4111111111111111"));
        assert!(!is_valid("4111111111111112"));
    }

    #[test]
    fn test_custom_alphabet() {
        let luhn = Luhn::with_alphabet(Alphabet::new("abcdef").unwrap());
        assert_eq!(luhn.calc_check_digit("abcdef"), Ok("e".to_string()));
        assert_eq!(luhn.checksum("abcdefe"), Ok(0));
        assert!(luhn.is_valid("abcdefe"));
        assert_eq!(luhn.validate("abcdefg"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(calc_check_digit(""), Ok("0".to_string()));
        assert_eq!(validate(""), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn test_calc_rejects_foreign_characters() {
        assert_eq!(calc_check_digit("12x"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_split() {
        assert_eq!(Luhn::DECIMAL.split("78949"), Some(("7894", "9")));
    }
}
