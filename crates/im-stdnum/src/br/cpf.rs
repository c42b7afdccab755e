//! Brazilian individual taxpayer number (CPF, Cadastro de Pessoas Físicas).
//!
//! Nine digits followed by two mod-11 check digits, the second computed
//! over the payload and the first check digit.

use crate::error::{Result, ValidationError};
use crate::identifier::{CheckDigit, Example, Identifier, KindInfo};
use crate::util::{char_len, clean, is_all_decimal_digits, parse_digits, split_groups, split_tail};

const INFO: KindInfo = KindInfo {
    name: "br.cpf",
    country: Some("BR"),
    tag: "cpf",
    title: "Brazilian individual taxpayer number (CPF)",
};

const EXAMPLES: &[Example] = &[
    Example::valid("390.533.447-05", "39053344705"),
    Example::valid("111.444.777-35", "11144477735"),
    Example::invalid("231.002.999-00", ValidationError::InvalidChecksum),
    Example::invalid("000.000.000-00", ValidationError::InvalidComponent),
    Example::invalid("111.111.111-11", ValidationError::InvalidComponent),
    Example::invalid("390.533.447-0", ValidationError::InvalidLength),
    Example::invalid("390.533.447-0A", ValidationError::InvalidFormat),
    Example::formatted("12345678909", "123.456.789-09"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cpf;

impl Identifier for Cpf {
    fn info(&self) -> &KindInfo {
        &INFO
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -.")
    }

    fn validate(&self, raw: &str) -> Result<String> {
        let number = self.compact(raw);
        if char_len(&number) != 11 {
            return Err(ValidationError::InvalidLength);
        }
        if !is_all_decimal_digits(&number) {
            return Err(ValidationError::InvalidFormat);
        }
        // Repdigits satisfy the checksum but are never issued
        let first = number.as_bytes()[0];
        if number.bytes().all(|b| b == first) {
            return Err(ValidationError::InvalidComponent);
        }
        let (payload, check) = split_tail(&number, 2);
        if self.calc_check_digit(payload)? != check {
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(number)
    }

    /// `XXX.XXX.XXX-XX`
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        let groups = split_groups(&number, &[3, 3, 3]);
        match groups.len() {
            4 => format!("{}-{}", groups[..3].join("."), groups[3]),
            _ => groups.join("."),
        }
    }

    fn check_digit(&self) -> Option<&dyn CheckDigit> {
        Some(self)
    }

    fn examples(&self) -> &'static [Example] {
        EXAMPLES
    }
}

impl CheckDigit for Cpf {
    /// Both check digits for a nine-digit payload
    fn calc_check_digit(&self, payload: &str) -> Result<String> {
        let digits = parse_digits(payload)?;
        if digits.len() != 9 {
            return Err(ValidationError::InvalidLength);
        }
        let first: u32 = digits
            .iter()
            .zip((2..=10).rev())
            .map(|(d, w)| d * w)
            .sum();
        let first = (11 - first % 11) % 11 % 10;
        let second: u32 = digits
            .iter()
            .zip((3..=11).rev())
            .map(|(d, w)| d * w)
            .sum::<u32>()
            + 2 * first;
        let second = (11 - second % 11) % 11 % 10;
        Ok(format!("{}{}", first, second))
    }

    fn check_digit_len(&self) -> usize {
        2
    }
}

identifier_functions!(Cpf, check_digit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_check_digit() {
        assert_eq!(calc_check_digit("390533447"), Ok("05".to_string()));
        assert_eq!(calc_check_digit("123456789"), Ok("09".to_string()));
        assert_eq!(calc_check_digit("12345678"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn test_format_partial() {
        assert_eq!(format("1234"), "123.4");
    }
}
