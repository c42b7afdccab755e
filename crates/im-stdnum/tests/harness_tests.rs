//! Worked examples of every registered kind

use im_stdnum::harness::{self, check_kind};
use im_stdnum::{registry, Expected, Registry, StdnumConfig};
use rstest::rstest;

#[test]
fn test_all_examples_pass() {
    let report = harness::run(registry());
    assert!(report.is_ok(), "{:#?}", report.failures);
}

#[test]
fn test_every_kind_carries_examples() {
    for kind in registry().iter() {
        assert!(
            !kind.examples().is_empty(),
            "{} has no worked examples",
            kind.info().name
        );
    }
}

#[test]
fn test_every_kind_has_a_valid_and_an_invalid_example() {
    for kind in registry().iter() {
        let examples = kind.examples();
        assert!(
            examples.iter().any(|e| matches!(e.expected, Expected::Valid(_))),
            "{} has no valid example",
            kind.info().name
        );
        assert!(
            examples.iter().any(|e| matches!(e.expected, Expected::Invalid(_))),
            "{} has no invalid example",
            kind.info().name
        );
    }
}

#[test]
fn test_configured_registry_passes() {
    let config = StdnumConfig::from_toml(
        r#"
        [san_marino]
        coe_whitelist = [1, 2, 3]

        [lithuania]
        validate_birth_date = false
        "#,
    )
    .unwrap();
    let registry = Registry::with_config(&config).unwrap();
    let report = harness::run(&registry);
    assert!(report.is_ok(), "{:#?}", report.failures);
    assert_eq!(report.kinds, registry.len());
}

#[rstest]
#[case("ch.ssn")]
#[case("es.dni")]
#[case("iban")]
#[case("isbn")]
#[case("iso7064.mod_97_10")]
#[case("sm.coe")]
fn test_single_kind(#[case] name: &str) {
    let kind = registry().get(name).unwrap();
    assert_eq!(check_kind(kind), vec![]);
}
