//! ISO/IEC 7064 check character systems.
//!
//! - [`Mod37_2`]: pure system, modulus = alphabet size, radix 2. Its preset
//!   [`Mod37_2::mod_11_2`] is the ISO 7064 Mod 11,2 system over `0-9X`.
//! - [`Mod37_36`]: hybrid system with modulus M = alphabet size and M+1.
//!   Its preset [`Mod37_36::mod_11_10`] is Mod 11,10 over decimal digits.
//! - [`Mod97_10`]: pure system over decimal digits with two check digits;
//!   letters count as 10..35. This is the IBAN check.
//!
//! A number is valid when its checksum equals 1.

use crate::checksum::{Alphabet, ALPHANUMERIC, ALPHANUMERIC_STAR, DIGITS, DIGITS_X};
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::clean;

const MOD_37_2_INFO: KindInfo = KindInfo {
    name: "iso7064.mod_37_2",
    country: None,
    tag: "mod_37_2",
    title: "ISO 7064 Mod 37,2",
};

const MOD_11_2_INFO: KindInfo = KindInfo {
    name: "iso7064.mod_11_2",
    country: None,
    tag: "mod_11_2",
    title: "ISO 7064 Mod 11,2",
};

const MOD_37_36_INFO: KindInfo = KindInfo {
    name: "iso7064.mod_37_36",
    country: None,
    tag: "mod_37_36",
    title: "ISO 7064 Mod 37,36",
};

const MOD_11_10_INFO: KindInfo = KindInfo {
    name: "iso7064.mod_11_10",
    country: None,
    tag: "mod_11_10",
    title: "ISO 7064 Mod 11,10",
};

const MOD_97_10_INFO: KindInfo = KindInfo {
    name: "iso7064.mod_97_10",
    country: None,
    tag: "mod_97_10",
    title: "ISO 7064 Mod 97,10",
};

const MOD_37_2_EXAMPLES: &[Example] = &[
    Example::valid("G123498654321H", "G123498654321H"),
    Example::valid("g123 4986 5432 1h", "G123498654321H"),
    Example::invalid("G123498654321I", ValidationError::InvalidChecksum),
    Example::invalid("G1234#", ValidationError::InvalidFormat),
];

const MOD_11_2_EXAMPLES: &[Example] = &[
    Example::valid("079X", "079X"),
    Example::valid("07940", "07940"),
    Example::invalid("0794", ValidationError::InvalidChecksum),
    Example::invalid("", ValidationError::InvalidLength),
];

const MOD_37_36_EXAMPLES: &[Example] = &[
    Example::valid("A12425GABC1234002M", "A12425GABC1234002M"),
    Example::invalid("A12425GABC1234002N", ValidationError::InvalidChecksum),
];

const MOD_11_10_EXAMPLES: &[Example] = &[
    Example::valid("002006673085", "002006673085"),
    Example::valid("07945", "07945"),
    Example::invalid("07946", ValidationError::InvalidChecksum),
    Example::invalid("0794A", ValidationError::InvalidFormat),
];

const MOD_97_10_EXAMPLES: &[Example] = &[
    Example::valid("794043", "794043"),
    Example::valid("NWBK60161331926819GB29", "NWBK60161331926819GB29"),
    Example::invalid("794044", ValidationError::InvalidChecksum),
    Example::invalid("7940-43#", ValidationError::InvalidFormat),
];

fn compact_with(alphabet: &Alphabet, raw: &str) -> String {
    alphabet.fold_case(&clean(raw, " -"))
}

/// ISO 7064 Mod 37,2 (pure, radix 2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mod37_2 {
    alphabet: Alphabet,
    info: &'static KindInfo,
}

impl Mod37_2 {
    /// Mod 37,2 over `0-9A-Z*`
    pub const DEFAULT: Mod37_2 = Mod37_2 {
        alphabet: ALPHANUMERIC_STAR,
        info: &MOD_37_2_INFO,
    };

    /// Mod 11,2 over `0-9X`
    pub const MOD_11_2: Mod37_2 = Mod37_2 {
        alphabet: DIGITS_X,
        info: &MOD_11_2_INFO,
    };

    pub fn mod_11_2() -> Self {
        Self::MOD_11_2
    }

    /// Same arithmetic over a custom alphabet; the modulus is its size
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            info: &MOD_37_2_INFO,
        }
    }

    /// Checksum of a full number; 1 means valid
    pub fn checksum(&self, number: &str) -> Result<u32> {
        let modulus = self.alphabet.len();
        let values = self.alphabet.values(number)?;
        Ok(values
            .into_iter()
            .fold(0, |acc, v| (2 * acc + v) % modulus))
    }
}

impl Default for Mod37_2 {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Identifier for Mod37_2 {
    fn info(&self) -> &KindInfo {
        self.info
    }

    fn compact(&self, raw: &str) -> String {
        compact_with(&self.alphabet, raw)
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if number.is_empty() {
            return Err(ValidationError::InvalidLength);
        }
        if self.checksum(&number)? != 1 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        if self.info.name == MOD_11_2_INFO.name {
            MOD_11_2_EXAMPLES
        } else if self.alphabet == ALPHANUMERIC_STAR {
            MOD_37_2_EXAMPLES
        } else {
            &[]
        }
    }
}

impl CheckDigit for Mod37_2 {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let modulus = i64::from(self.alphabet.len());
        let sum = i64::from(self.checksum(payload)?);
        let value = (1 - 2 * sum).rem_euclid(modulus);
        self.alphabet
            .symbol(value as u32)
            .map(String::from)
            .ok_or(ValidationError::InvalidChecksum)
    }
}

/// ISO 7064 Mod 37,36 (hybrid system, moduli M and M+1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mod37_36 {
    alphabet: Alphabet,
    info: &'static KindInfo,
}

impl Mod37_36 {
    /// Mod 37,36 over `0-9A-Z`
    pub const DEFAULT: Mod37_36 = Mod37_36 {
        alphabet: ALPHANUMERIC,
        info: &MOD_37_36_INFO,
    };

    /// Mod 11,10 over decimal digits
    pub const MOD_11_10: Mod37_36 = Mod37_36 {
        alphabet: DIGITS,
        info: &MOD_11_10_INFO,
    };

    pub fn mod_11_10() -> Self {
        Self::MOD_11_10
    }

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            info: &MOD_37_36_INFO,
        }
    }

    /// Checksum of a full number; 1 means valid
    pub fn checksum(&self, number: &str) -> Result<u32> {
        let modulus = self.alphabet.len();
        let values = self.alphabet.values(number)?;
        Ok(values.into_iter().fold(modulus / 2, |acc, v| {
            let acc = if acc == 0 { modulus } else { acc };
            ((acc * 2) % (modulus + 1) + v) % modulus
        }))
    }
}

impl Default for Mod37_36 {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Identifier for Mod37_36 {
    fn info(&self) -> &KindInfo {
        self.info
    }

    fn compact(&self, raw: &str) -> String {
        compact_with(&self.alphabet, raw)
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if number.is_empty() {
            return Err(ValidationError::InvalidLength);
        }
        if self.checksum(&number)? != 1 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        if self.info.name == MOD_11_10_INFO.name {
            MOD_11_10_EXAMPLES
        } else if self.alphabet == ALPHANUMERIC {
            MOD_37_36_EXAMPLES
        } else {
            &[]
        }
    }
}

impl CheckDigit for Mod37_36 {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let modulus = i64::from(self.alphabet.len());
        let sum = i64::from(self.checksum(payload)?);
        let sum = if sum == 0 { modulus } else { sum };
        let value = (1 - (sum * 2) % (modulus + 1)).rem_euclid(modulus);
        self.alphabet
            .symbol(value as u32)
            .map(String::from)
            .ok_or(ValidationError::InvalidChecksum)
    }
}

/// ISO 7064 Mod 97,10 with two decimal check digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod97_10;

impl Mod97_10 {
    /// Remainder modulo 97 of the number read as decimal, letters counting as 10..35
    pub fn checksum(&self, number: &str) -> Result<u32> {
        number.chars().try_fold(0u32, |acc, c| {
            let value = c.to_digit(36).ok_or(ValidationError::InvalidFormat)?;
            Ok(if value < 10 {
                (acc * 10 + value) % 97
            } else {
                (acc * 100 + value) % 97
            })
        })
    }
}

impl Identifier for Mod97_10 {
    fn info(&self) -> &KindInfo {
        &MOD_97_10_INFO
    }

    fn compact(&self, raw: &str) -> String {
        compact_with(&ALPHANUMERIC, raw)
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if number.is_empty() {
            return Err(ValidationError::InvalidLength);
        }
        if self.checksum(&number)? != 1 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        MOD_97_10_EXAMPLES
    }
}

impl CheckDigit for Mod97_10 {
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let sum = self.checksum(payload)?;
        Ok(format!("{:02}", (98 - (sum * 100) % 97) % 97))
    }

    fn check_digit_len(&self) -> usize {
        2
    }
}

/// Mod 37,2 checksum of a full number
pub fn mod_37_2_checksum(number: &str) -> Result<u32> {
    Mod37_2::DEFAULT.checksum(number)
}

/// Mod 37,2 check character for a payload
pub fn mod_37_2_calc_check_digit(payload: &str) -> Result<String> {
    Mod37_2::DEFAULT.calc_check_digit(payload)
}

/// Mod 11,2 check character (`0-9` or `X`) for a decimal payload
pub fn mod_11_2_calc_check_digit(payload: &str) -> Result<String> {
    Mod37_2::MOD_11_2.calc_check_digit(payload)
}

/// Mod 37,36 checksum of a full number
pub fn mod_37_36_checksum(number: &str) -> Result<u32> {
    Mod37_36::DEFAULT.checksum(number)
}

/// Mod 37,36 check character for a payload
pub fn mod_37_36_calc_check_digit(payload: &str) -> Result<String> {
    Mod37_36::DEFAULT.calc_check_digit(payload)
}

/// Mod 11,10 check digit for a decimal payload
pub fn mod_11_10_calc_check_digit(payload: &str) -> Result<String> {
    Mod37_36::MOD_11_10.calc_check_digit(payload)
}

/// Mod 97,10 remainder of a full number
pub fn mod_97_10_checksum(number: &str) -> Result<u32> {
    Mod97_10.checksum(number)
}

/// The two Mod 97,10 check digits for a payload
pub fn mod_97_10_calc_check_digits(payload: &str) -> Result<String> {
    Mod97_10.calc_check_digit(payload)
}
