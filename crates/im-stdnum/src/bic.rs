//! BIC (ISO 9362 Business Identifier Code).
//!
//! Eight or eleven characters: four letters for the institution, the
//! two-letter ISO 3166 country, two alphanumerics for the location and an
//! optional three-character branch code. There is no check digit.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, ValidationError};
use crate::identifier::{Example, Identifier, KindInfo};
use crate::iso3166;
use crate::util::{char_len, clean, uppercase_if_alpha};

lazy_static! {
    static ref BIC_PATTERN: Regex = Regex::new(r"^[A-Z]{6}[0-9A-Z]{2}([0-9A-Z]{3})?$").unwrap();
}

const INFO: KindInfo = KindInfo {
    name: "bic",
    country: None,
    tag: "bic",
    title: "BIC (ISO 9362 Business Identifier Code)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("AGRIFRPP882", "AGRIFRPP882"),
    Example::valid("ABNA BE 2A", "ABNABE2A"),
    Example::valid("deutdeff", "DEUTDEFF"),
    Example::invalid("AGRIFRPP8", ValidationError::InvalidLength),
    Example::invalid("AGRIF2PP", ValidationError::InvalidFormat),
    Example::invalid("AGRIQQPP", ValidationError::InvalidComponent),
    Example::formatted("agriFRPP", "AGRIFRPP"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bic;

impl Identifier for Bic {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        uppercase_if_alpha(&clean(raw, " -"))
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if !matches!(char_len(&number), 8 | 11) {
            return Err(ValidationError::InvalidLength);
        }
        if !BIC_PATTERN.is_match(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        // The pattern guarantees ASCII, so byte slicing is safe
        if !iso3166::is_known(&number[4..6]) {
            return Err(ValidationError::InvalidComponent);
        }
        Ok(number)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

identifier_functions!(Bic);

/// Institution (bank) code: the first four letters
pub fn bank_code(raw: &str) -> Result<String> {
    Ok(validate(raw)?[..4].to_string())
}

/// ISO 3166 country code: letters five and six
pub fn country_code(raw: &str) -> Result<String> {
    Ok(validate(raw)?[4..6].to_string())
}

/// Branch code, `None` for eight-character codes (primary office)
pub fn branch_code(raw: &str) -> Result<Option<String>> {
    let number = validate(raw)?;
    Ok(number.get(8..).filter(|b| !b.is_empty()).map(str::to_string))
}
