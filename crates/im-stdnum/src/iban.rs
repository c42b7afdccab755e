//! IBAN (International Bank Account Number).
//!
//! A two-letter country code, two check digits and a country-specific
//! BBAN. The check digits make the rearranged number (BBAN, country, check)
//! equal 1 under ISO 7064 Mod 97,10.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::checksum::iso7064::Mod97_10;
use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, split_groups, uppercase_if_alpha};

const INFO: KindInfo = KindInfo {
    name: "iban",
    country: None,
    tag: "iban",
    title: "IBAN (International Bank Account Number)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("GR16 0110 1250 0000 0001 2300 695", "GR1601101250000000012300695"),
    Example::valid("gb29 nwbk 6016 1331 9268 19", "GB29NWBK60161331926819"),
    Example::valid("DE89370400440532013000", "DE89370400440532013000"),
    Example::invalid("GB28NWBK60161331926819", ValidationError::InvalidChecksum),
    Example::invalid("GB29NWBK6016133192681", ValidationError::InvalidLength),
    Example::invalid("QQ29NWBK60161331926819", ValidationError::InvalidComponent),
    Example::invalid("GBX9NWBK60161331926819", ValidationError::InvalidFormat),
    Example::formatted("GR1601101250000000012300695", "GR16 0110 1250 0000 0001 2300 695"),
];

/// Total IBAN length per country
const COUNTRY_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20), ("BE", 16), ("BG", 22),
    ("BH", 22), ("BI", 27), ("BR", 29), ("BY", 28), ("CH", 21), ("CR", 22), ("CY", 28), ("CZ", 24),
    ("DE", 22), ("DJ", 27), ("DK", 18), ("DO", 28), ("EE", 20), ("EG", 29), ("ES", 24), ("FI", 18),
    ("FK", 18), ("FO", 18), ("FR", 27), ("GB", 22), ("GE", 22), ("GI", 23), ("GL", 18), ("GR", 27),
    ("GT", 28), ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23), ("IQ", 23), ("IS", 26), ("IT", 27),
    ("JO", 30), ("KW", 30), ("KZ", 20), ("LB", 28), ("LC", 32), ("LI", 21), ("LT", 20), ("LU", 20),
    ("LV", 21), ("LY", 25), ("MC", 27), ("MD", 24), ("ME", 22), ("MK", 19), ("MN", 20), ("MR", 27),
    ("MT", 31), ("MU", 30), ("NI", 28), ("NL", 18), ("NO", 15), ("OM", 23), ("PK", 24), ("PL", 28),
    ("PS", 29), ("PT", 25), ("QA", 29), ("RO", 24), ("RS", 22), ("RU", 33), ("SA", 24), ("SC", 31),
    ("SD", 18), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27), ("SO", 23), ("ST", 25), ("SV", 28),
    ("TL", 23), ("TN", 24), ("TR", 26), ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20), ("YE", 30),
];

lazy_static! {
    static ref LENGTHS: HashMap<&'static str, usize> = COUNTRY_LENGTHS.iter().copied().collect();
}

/// Shortest and longest IBAN over all countries
const MIN_LENGTH: usize = 5;
const MAX_LENGTH: usize = 34;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iban;

/// Number rearranged for the Mod 97,10 check: BBAN, then country and check digits
fn rearranged(number: &str) -> String {
    format!("{}{}", &number[4..], &number[..4])
}

fn has_iban_shape(number: &str) -> bool {
    let bytes = number.as_bytes();
    bytes.len() >= 4
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..]
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

impl Identifier for Iban {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        let number = uppercase_if_alpha(&clean(raw, " -"));
        let mut rest = number.as_str();
        while let Some(stripped) = rest.strip_prefix("IBAN") {
            rest = stripped.trim_start();
        }
        rest.to_string()
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&char_len(&number)) {
            return Err(ValidationError::InvalidLength);
        }
        if !has_iban_shape(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        let expected = LENGTHS
            .get(&number[..2])
            .ok_or(ValidationError::InvalidComponent)?;
        if number.len() != *expected {
            return Err(ValidationError::InvalidLength);
        }
        if Mod97_10.checksum(&rearranged(&number))? != 1 {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        let sizes = vec![4; number.chars().count() / 4];
        split_groups(&number, &sizes).join(" ")
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

identifier_functions!(Iban);

/// Country code of a valid IBAN
pub fn country_code(raw: &str) -> Result<String> {
    Ok(validate(raw)?[..2].to_string())
}

/// Check digits for an IBAN, ignoring whatever is in positions three and four
pub fn calc_check_digits(raw: &str) -> Result<String> {
    let number = Iban.compact(raw);
    if char_len(&number) < 4 {
        return Err(ValidationError::InvalidLength);
    }
    if !has_iban_shape(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    Mod97_10.calc_check_digit(&format!("{}{}", &number[4..], &number[..2]))
}

/// Countries with a registered IBAN length
pub fn countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_LENGTHS.iter().map(|(cc, _)| *cc)
}
