//! San Marino economic operator code (COE, Codice operatore economico).
//!
//! One to five digits without leading zeros. Numbers of one or two digits
//! are only valid if they appear on a list of issued codes; that list is
//! data and can be replaced through [`crate::config::StdnumConfig`].

use std::borrow::Cow;

use crate::error::{Result, ValidationError};
use crate::identifier::{Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits};

const INFO: KindInfo = KindInfo {
    name: "sm.coe",
    country: Some("SM"),
    tag: "coe",
    title: "San Marino economic operator code (COE)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("51", "51"),
    Example::valid("024165", "24165"),
    Example::valid("2 4165", "24165"),
    Example::invalid("2416A", ValidationError::InvalidFormat),
    Example::invalid("1124165", ValidationError::InvalidLength),
    Example::invalid("", ValidationError::InvalidLength),
    Example::invalid("1", ValidationError::InvalidComponent),
    Example::invalid("0 3", ValidationError::InvalidComponent),
];

/// Issued codes of one or two digits
pub const LOW_NUMBERS: &[u16] = &[
    2, 4, 6, 7, 8, 9, 10, 11, 13, 16, 18, 19, 20, 21, 25, 26, 30, 32, 33, 35, 36, 37, 38, 39, 40,
    42, 45, 47, 49, 51, 52, 55, 56, 57, 58, 59, 60, 61, 62, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73,
    74, 75, 76, 77, 78, 79, 80, 81, 82, 84, 85, 87, 88, 91, 92, 94, 95, 96, 97, 99,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coe {
    whitelist: Cow<'static, [u16]>,
}

impl Coe {
    pub const DEFAULT: Coe = Coe {
        whitelist: Cow::Borrowed(LOW_NUMBERS),
    };

    /// Validator with a replacement list of issued one- and two-digit codes
    pub fn with_whitelist(whitelist: Vec<u16>) -> Self {
        Self {
            whitelist: Cow::Owned(whitelist),
        }
    }

    pub fn whitelist(&self) -> &[u16] {
        &self.whitelist
    }
}

impl Default for Coe {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Identifier for Coe {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " .")
            .trim_start_matches(|c: char| c == '0' || c.is_whitespace())
            .to_string()
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if number.is_empty() || char_len(&number) > 5 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        if number.len() <= 2 {
            let value: u16 = number.parse().map_err(|_| ValidationError::InvalidFormat)?;
            if !self.whitelist.contains(&value) {
                return Err(ValidationError::InvalidComponent);
            }
        }
        Ok(number)
    }

    fn examples(&self) -> &'static [Example] {
        if self.whitelist.as_ref() == LOW_NUMBERS {
            EXAMPLES
        } else {
            &[]
        }
    }
}

identifier_functions!(Coe::DEFAULT);
