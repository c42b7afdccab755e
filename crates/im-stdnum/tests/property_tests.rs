//! Universal properties of every identifier kind
//!
//! Arbitrary input is thrown at every registered kind; well-formed payloads
//! are completed with their check digits and must then validate.

use im_stdnum::{registry, Identifier};
use proptest::prelude::*;
use proptest::strategy::Union;

fn kinds() -> Vec<&'static dyn Identifier> {
    registry().iter().collect()
}

/// Mostly identifier-looking noise, sometimes arbitrary Unicode
fn noisy_input() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[0-9A-Za-z .\\-/()]{0,40}",
        2 => "(BE|NL|PL|SI|CY|CL|CHE|IBAN|756)[0-9A-Za-z .\\-]{0,20}",
        1 => "\\PC{0,30}",
        1 => "[0-9]{100,300}",
    ]
}

fn case(name: &'static str, pattern: &'static str) -> BoxedStrategy<(&'static str, String)> {
    pattern.prop_map(move |payload| (name, payload)).boxed()
}

/// Payloads that meet each kind's structural constraints
fn structured_payloads() -> impl Strategy<Value = (&'static str, String)> {
    Union::new(vec![
        case("luhn", "[0-9]{1,20}"),
        case("iso7064.mod_37_2", "[0-9A-Z*]{1,20}"),
        case("iso7064.mod_11_2", "[0-9]{1,20}"),
        case("iso7064.mod_37_36", "[0-9A-Z]{1,20}"),
        case("iso7064.mod_11_10", "[0-9]{1,20}"),
        case("iso7064.mod_97_10", "[0-9A-Z]{1,20}"),
        case("ean", "[0-9]{7}|[0-9]{11,13}"),
        case("isbn", "[0-9]{9}|97[89][0-9]{9}"),
        case("imei", "[0-9]{14}"),
        case("be.vat", "[01][0-9]{6}[1-9]"),
        case("br.cpf", "0[0-9]{7}[1-9]"),
        case("ca.bn", "[0-9]{8}"),
        case("ca.sin", "[1-79][0-9]{7}"),
        case("ch.ssn", "756[0-9]{9}"),
        case("cl.rut", "[1-9][0-9]{6,7}"),
        case("co.nit", "[0-9]{7,15}"),
        case("cy.vat", "[03-9][0-9]{7}"),
        case("ec.ci", "(0[1-9]|1[0-9]|2[0-4])[0-6][0-9]{6}"),
        case("ee.ik", "[3-6][0-9]{2}(0[1-9]|1[0-2])(0[1-9]|1[0-9]|2[0-8])[0-9]{3}"),
        case("es.dni", "[0-9]{8}"),
        case("es.nie", "[XYZ][0-9]{7}"),
        case("fr.siren", "[0-9]{8}"),
        case("gn.nifp", "[0-9]{8}"),
        case("lt.asmens", "[3-6][0-9]{2}(0[1-9]|1[0-2])(0[1-9]|1[0-9]|2[0-8])[0-9]{3}"),
        case("nl.bsn", "[1-9][0-9]{7}"),
        case("no.orgnr", "[0-9]{8}"),
        case("pl.nip", "[0-9]{9}"),
        case("si.ddv", "[1-9][0-9]{6}"),
        case("tr.vkn", "[0-9]{9}"),
        case("ua.rntrc", "[0-9]{9}"),
        case("us.rtn", "[0-9]{8}"),
        case("za.tin", "[01239][0-9]{8}"),
    ])
}

/// Fixed-length kinds with every character count their `validate` accepts,
/// including the counts `compact` pads up to
const FIXED_LENGTHS: &[(&str, &[usize])] = &[
    ("bic", &[8, 11]),
    ("ean", &[8, 12, 13, 14]),
    ("imei", &[14, 15, 16]),
    ("isbn", &[10, 13]),
    ("be.vat", &[9, 10]),
    ("br.cpf", &[11]),
    ("ca.bn", &[9, 15]),
    ("ca.sin", &[9]),
    ("ch.ssn", &[13]),
    ("ch.uid", &[12]),
    ("cl.rut", &[8, 9]),
    ("cy.vat", &[9]),
    ("ec.ci", &[10]),
    ("ee.ik", &[11]),
    ("es.dni", &[9]),
    ("es.nie", &[9]),
    ("fr.siren", &[9]),
    ("gn.nifp", &[9]),
    ("lt.asmens", &[11]),
    ("nl.bsn", &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
    ("no.orgnr", &[9]),
    ("pl.nip", &[10]),
    ("si.ddv", &[8]),
    ("tr.vkn", &[10]),
    ("ua.rntrc", &[10]),
    ("us.rtn", &[9]),
    ("za.tin", &[10]),
];

/// Inputs with at least one multi-byte character and a character count the
/// kind never accepts
fn wrong_length_multibyte() -> impl Strategy<Value = (&'static str, String)> {
    (
        prop::sample::select(FIXED_LENGTHS),
        "[1-9]{0,12}",
        "[éÄß١２€]",
        "[1-9éÄß١２€]{0,12}",
    )
        .prop_map(|((name, lengths), head, wide, tail)| {
            (name, lengths, format!("{}{}{}", head, wide, tail))
        })
        .prop_filter("accepted length", |(_, lengths, input)| {
            !lengths.contains(&input.chars().count())
        })
        .prop_map(|(name, _, input)| (name, input))
}

proptest! {
    #[test]
    fn test_compact_is_idempotent(input in noisy_input()) {
        for kind in kinds() {
            let once = kind.compact(&input);
            prop_assert_eq!(kind.compact(&once), once.clone(), "{}", kind.info().name);
        }
    }

    #[test]
    fn test_is_valid_agrees_with_validate(input in noisy_input()) {
        for kind in kinds() {
            prop_assert_eq!(kind.is_valid(&input), kind.validate(&input).is_ok());
        }
    }

    #[test]
    fn test_operations_are_deterministic(input in noisy_input()) {
        for kind in kinds() {
            prop_assert_eq!(kind.validate(&input), kind.validate(&input));
            prop_assert_eq!(kind.format(&input), kind.format(&input));
        }
    }

    #[test]
    fn test_valid_input_survives_format(input in noisy_input()) {
        for kind in kinds() {
            if let Ok(valid) = kind.validate(&input) {
                let formatted = kind.format(&input);
                prop_assert_eq!(kind.compact(&formatted), kind.compact(&input));
                prop_assert_eq!(kind.validate(&formatted), Ok(valid));
            }
        }
    }

    #[test]
    fn test_check_digit_completes_payload((name, payload) in structured_payloads()) {
        let kind = registry().get(name).unwrap();
        let engine = kind.check_digit().unwrap();
        // Some residues have no legal check character
        if let Ok(check) = engine.calc_check_digit(&payload) {
            let number = format!("{}{}", payload, check);
            prop_assert_eq!(kind.validate(&number), Ok(number.clone()), "{}", name);
            prop_assert_eq!(engine.split(&number), Some((payload.as_str(), check.as_str())));
        }
    }

    #[test]
    fn test_swiss_uid_check_digit(payload in "[0-9]{8}") {
        let kind = registry().get("ch.uid").unwrap();
        if let Ok(check) = kind.check_digit().unwrap().calc_check_digit(&payload) {
            let number = format!("CHE{}{}", payload, check);
            prop_assert_eq!(kind.validate(&number), Ok(number.clone()));
        }
    }

    #[test]
    fn test_wrong_length_reports_length(payload in "[A-Z#]{1,3}") {
        // Far too short for every fixed-length national kind
        for name in ["ch.ssn", "es.dni", "be.vat", "pl.nip", "br.cpf", "ee.ik"] {
            let kind = registry().get(name).unwrap();
            prop_assert_eq!(
                kind.validate(&payload),
                Err(im_stdnum::ValidationError::InvalidLength),
                "{}", name
            );
        }
    }

    #[test]
    fn test_multibyte_wrong_length_reports_length((name, input) in wrong_length_multibyte()) {
        let kind = registry().get(name).unwrap();
        prop_assert_eq!(
            kind.validate(&input),
            Err(im_stdnum::ValidationError::InvalidLength),
            "{} {:?}", name, input
        );
    }

    #[test]
    fn test_be_vat_multiple_of_97_accepts_both_check_pairs(k in 1u32..206_185) {
        let payload = format!("{:08}", k * 97);
        for check in ["00", "97"] {
            let number = format!("{}{}", payload, check);
            prop_assert_eq!(im_stdnum::be::vat::validate(&number), Ok(number.clone()));
        }
    }
}
