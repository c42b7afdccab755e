//! End-to-end scenarios with literal values
//!
//! Each case goes through the public per-kind functions and, where it makes
//! sense, through the registry as well.

use im_stdnum::checksum::iso7064::{self, Mod37_36};
use im_stdnum::{be, bic, ch, co, ean, es, nl};
use im_stdnum::{registry, Alphabet, CheckDigit, ValidationError};
use rstest::rstest;

// === Swiss SSN ===

#[rstest]
#[case("7569217076985", "7569217076985")]
#[case("756.9217.0769.85", "7569217076985")]
fn test_ch_ssn_valid(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(ch::ssn::validate(input), Ok(expected.to_string()));
}

#[rstest]
#[case("756.9217.0769.84", ValidationError::InvalidChecksum)]
#[case("123.4567.8910.19", ValidationError::InvalidComponent)]
fn test_ch_ssn_invalid(#[case] input: &str, #[case] error: ValidationError) {
    assert_eq!(ch::ssn::validate(input), Err(error));
}

#[test]
fn test_ch_ssn_format() {
    assert_eq!(ch::ssn::format("7569217076985"), "756.9217.0769.85");
}

// === ISO 7064 Mod 37,36 ===

#[test]
fn test_mod_37_36_check_digit() {
    assert_eq!(
        iso7064::mod_37_36_calc_check_digit("A12425GABC1234002"),
        Ok("M".to_string())
    );
}

#[test]
fn test_mod_37_36_validate() {
    let engine = registry().get("iso7064.mod_37_36").unwrap();
    assert_eq!(
        engine.validate("A12425GABC1234002M"),
        Ok("A12425GABC1234002M".to_string())
    );
}

#[test]
fn test_mod_37_36_decimal_alphabet() {
    let engine = Mod37_36::with_alphabet(Alphabet::new("0123456789").unwrap());
    assert_eq!(engine.calc_check_digit("00200667308"), Ok("5".to_string()));
}

// === Spanish DNI ===

#[rstest]
#[case("54362315-K", Ok("54362315K"))]
#[case("54362315Z", Err(ValidationError::InvalidChecksum))]
#[case("54362315", Err(ValidationError::InvalidLength))]
fn test_es_dni(#[case] input: &str, #[case] expected: Result<&str, ValidationError>) {
    assert_eq!(es::dni::validate(input), expected.map(String::from));
}

// === Belgian VAT ===

#[test]
fn test_be_vat_compact() {
    assert_eq!(be::vat::compact("BE403019261"), "0403019261");
}

#[rstest]
#[case("BE 428759497", Ok("0428759497"))]
#[case("BE431150351", Err(ValidationError::InvalidChecksum))]
fn test_be_vat(#[case] input: &str, #[case] expected: Result<&str, ValidationError>) {
    assert_eq!(be::vat::validate(input), expected.map(String::from));
}

#[rstest]
#[case("0000009700", Ok("0000009700"))]
#[case("0000009797", Ok("0000009797"))]
#[case("0000009701", Err(ValidationError::InvalidChecksum))]
fn test_be_vat_multiple_of_97(
    #[case] input: &str,
    #[case] expected: Result<&str, ValidationError>,
) {
    assert_eq!(be::vat::validate(input), expected.map(String::from));
}

// === Length is counted in characters ===

#[rstest]
#[case("ch.ssn", "75692170769é")]
#[case("bic", "ÄÖÜß")]
#[case("es.dni", "5436231é")]
#[case("ean", "١٢٣٤")]
#[case("be.vat", "0403019261é")]
fn test_multibyte_wrong_length(#[case] name: &str, #[case] input: &str) {
    let kind = registry().get(name).unwrap();
    assert_eq!(kind.validate(input), Err(ValidationError::InvalidLength));
}

#[rstest]
#[case("ch.ssn", "756921707698é")]
#[case("bic", "ÄÖÜßÄÖÜß")]
#[case("es.dni", "5436231éK")]
fn test_multibyte_right_length_is_format(#[case] name: &str, #[case] input: &str) {
    let kind = registry().get(name).unwrap();
    assert_eq!(kind.validate(input), Err(ValidationError::InvalidFormat));
}

// === Colombian NIT ===

#[test]
fn test_co_nit() {
    assert_eq!(co::nit::validate("213.123.432-1"), Ok("2131234321".to_string()));
    assert_eq!(co::nit::validate("2131234325"), Err(ValidationError::InvalidChecksum));
    assert_eq!(co::nit::format("2131234321"), "213.123.432-1");
}

// === EAN ===

#[rstest]
#[case("73513537", "73513537")]
#[case("978-0-471-11709-4", "9780471117094")]
#[case("98412345678908", "98412345678908")]
fn test_ean_valid(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(ean::validate(input), Ok(expected.to_string()));
}

// === BIC ===

#[rstest]
#[case("AGRIFRPP882", Ok("AGRIFRPP882"))]
#[case("ABNA BE 2A", Ok("ABNABE2A"))]
#[case("AGRIFRPP8", Err(ValidationError::InvalidLength))]
#[case("AGRIF2PP", Err(ValidationError::InvalidFormat))]
fn test_bic(#[case] input: &str, #[case] expected: Result<&str, ValidationError>) {
    assert_eq!(bic::validate(input), expected.map(String::from));
}

#[test]
fn test_bic_format() {
    assert_eq!(bic::format("agriFRPP"), "AGRIFRPP");
}

// === Dutch postcode ===

#[rstest]
#[case("2601 DC", Ok("2601 DC"))]
#[case("NL-2611ET", Ok("2611 ET"))]
#[case("26112 ET", Err(ValidationError::InvalidFormat))]
#[case("2611 SS", Err(ValidationError::InvalidComponent))]
fn test_nl_postcode(#[case] input: &str, #[case] expected: Result<&str, ValidationError>) {
    assert_eq!(nl::postcode::validate(input), expected.map(String::from));
}

// === Registry lookups agree with the module functions ===

#[rstest]
#[case("CH", "ssn", "756.9217.0769.85")]
#[case("ES", "dni", "54362315-K")]
#[case("BE", "vat", "BE 428759497")]
#[case("CO", "nit", "213.123.432-1")]
#[case("NL", "postcode", "NL-2611ET")]
fn test_registry_lookup_matches_module(
    #[case] country: &str,
    #[case] tag: &str,
    #[case] input: &str,
) {
    let kind = registry().lookup(country, tag).unwrap();
    let by_name = registry()
        .get(&format!("{}.{}", country.to_lowercase(), tag))
        .unwrap();
    assert!(kind.is_valid(input));
    assert_eq!(kind.validate(input), by_name.validate(input));
}
