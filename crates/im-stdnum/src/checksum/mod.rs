//! Generic check-digit engines
//!
//! - [`luhn`]: the Luhn mod-N algorithm over an arbitrary alphabet
//! - [`iso7064`]: ISO 7064 Mod 37,2 / Mod 37,36 (and their Mod 11 presets) and Mod 97,10
//! - weighted sums with the common mod-11 residue rules (this module)

pub mod iso7064;
pub mod luhn;

use std::borrow::Cow;

use crate::error::{Result, ValidationError};

/// Ordered set of symbols; a symbol's value is its position.
///
/// Alphabets always hold at least two distinct symbols, so the derived
/// modulus is never degenerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Cow<'static, str>,
}

/// `0123456789`
pub const DIGITS: Alphabet = Alphabet::from_static("0123456789");

/// `0123456789X`, used by Mod 11,2
pub const DIGITS_X: Alphabet = Alphabet::from_static("0123456789X");

/// `0`..`9` then `A`..`Z`
pub const ALPHANUMERIC: Alphabet = Alphabet::from_static("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// [`ALPHANUMERIC`] plus `*`, used by Mod 37,2
pub const ALPHANUMERIC_STAR: Alphabet =
    Alphabet::from_static("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*");

impl Alphabet {
    /// Wrap a known-good static symbol list
    pub(crate) const fn from_static(symbols: &'static str) -> Self {
        Self {
            symbols: Cow::Borrowed(symbols),
        }
    }

    /// Build an alphabet from user-supplied symbols.
    ///
    /// Returns `None` for fewer than two symbols or repeated symbols.
    pub fn new(symbols: impl Into<String>) -> Option<Self> {
        let symbols: String = symbols.into();
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() < 2 {
            return None;
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[i + 1..].contains(c) {
                return None;
            }
        }
        Some(Self {
            symbols: Cow::Owned(symbols),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Number of symbols, which is the modulus of the engines using it
    pub fn len(&self) -> u32 {
        self.symbols.chars().count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of `c`, if it belongs to the alphabet
    pub fn value_of(&self, c: char) -> Option<u32> {
        self.symbols.chars().position(|s| s == c).map(|p| p as u32)
    }

    /// Symbol at position `value`
    pub fn symbol(&self, value: u32) -> Option<char> {
        self.symbols.chars().nth(value as usize)
    }

    /// Upper-case `s` unless the alphabet itself has lower-case symbols
    pub fn fold_case(&self, s: &str) -> String {
        if self.symbols.chars().any(char::is_lowercase) {
            s.to_string()
        } else {
            s.to_ascii_uppercase()
        }
    }

    /// Values of every character of `s`; `InvalidFormat` on a foreign character
    pub fn values(&self, s: &str) -> Result<Vec<u32>> {
        s.chars()
            .map(|c| self.value_of(c).ok_or(ValidationError::InvalidFormat))
            .collect()
    }
}

/// How a mod-11 check value of ten is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenRule {
    /// Ten is written as `0`
    Zero,
    /// Ten is written as `X`
    X,
    /// No check character exists for ten
    Invalid,
}

/// Sum of `digit * weight`, pairing from the left and stopping at the shorter side
pub fn weighted_sum(digits: &[u32], weights: &[i64]) -> i64 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| i64::from(d) * w)
        .sum()
}

/// Render a mod-11 check value (`0..=10`).
///
/// Values 0..=9 are the digit itself; ten follows `rule`. Anything larger
/// has no check character.
pub fn mod11_char(value: i64, rule: TenRule) -> Result<char> {
    match value {
        0..=9 => char::from_digit(value as u32, 10).ok_or(ValidationError::InvalidChecksum),
        10 => match rule {
            TenRule::Zero => Ok('0'),
            TenRule::X => Ok('X'),
            TenRule::Invalid => Err(ValidationError::InvalidChecksum),
        },
        _ => Err(ValidationError::InvalidChecksum),
    }
}

/// GTIN/EAN check value of a payload: weights 3,1,3,... counted from the right.
pub fn gtin_check_value(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { 3 * d } else { d })
        .sum();
    (10 - sum % 10) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_values() {
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(ALPHANUMERIC_STAR.len(), 37);
        assert_eq!(ALPHANUMERIC.value_of('Z'), Some(35));
        assert_eq!(DIGITS_X.symbol(10), Some('X'));
        assert_eq!(DIGITS.values("12a"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_alphabet_new_rejects_degenerate() {
        assert!(Alphabet::new("").is_none());
        assert!(Alphabet::new("a").is_none());
        assert!(Alphabet::new("abca").is_none());
        assert_eq!(Alphabet::new("abcdef").map(|a| a.len()), Some(6));
    }

    #[test]
    fn test_mod11_char() {
        assert_eq!(mod11_char(7, TenRule::Invalid), Ok('7'));
        assert_eq!(mod11_char(10, TenRule::X), Ok('X'));
        assert_eq!(mod11_char(10, TenRule::Zero), Ok('0'));
        assert_eq!(
            mod11_char(10, TenRule::Invalid),
            Err(ValidationError::InvalidChecksum)
        );
        assert_eq!(
            mod11_char(11, TenRule::X),
            Err(ValidationError::InvalidChecksum)
        );
    }

    #[test]
    fn test_gtin_check_value() {
        // 978047111709 + 4
        assert_eq!(gtin_check_value(&[9, 7, 8, 0, 4, 7, 1, 1, 1, 7, 0, 9]), 4);
        // 7351353 + 7
        assert_eq!(gtin_check_value(&[7, 3, 5, 1, 3, 5, 3]), 7);
    }

    #[test]
    fn test_weighted_sum_stops_at_shorter() {
        assert_eq!(weighted_sum(&[1, 2, 3], &[3, 2]), 7);
        assert_eq!(weighted_sum(&[1, 2], &[-1, 5, 7]), 9);
    }
}
