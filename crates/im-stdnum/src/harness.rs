//! Runs the worked examples carried by each identifier kind.
//!
//! Every [`Example`] is checked for its stated outcome. Inputs that validate
//! are also checked against the universal properties: compact is idempotent,
//! the presentation form round-trips, `is_valid` agrees with `validate` and
//! the check digit recomputes from the payload.

use serde::Serialize;

use crate::identifier::{Example, Expected, Identifier};
use crate::registry::Registry;

/// One broken expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: &'static str,
    pub input: &'static str,
    pub problem: String,
}

/// Outcome of running the examples of a set of kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub kinds: usize,
    pub examples: usize,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the examples of every kind in `registry`.
pub fn run(registry: &Registry) -> Report {
    let mut report = Report::default();
    for kind in registry.iter() {
        report.kinds += 1;
        report.examples += kind.examples().len();
        report.failures.extend(check_kind(kind));
    }
    report
}

/// Check all examples of a single kind.
pub fn check_kind(kind: &dyn Identifier) -> Vec<Failure> {
    kind.examples()
        .iter()
        .flat_map(|example| check_example(kind, example))
        .collect()
}

fn check_example(kind: &dyn Identifier, example: &Example) -> Vec<Failure> {
    let name = kind.info().name;
    let input = example.input;
    let mut problems = Vec::new();

    let result = kind.validate(input);
    if kind.is_valid(input) != result.is_ok() {
        problems.push("is_valid disagrees with validate".to_string());
    }

    match example.expected {
        Expected::Valid(output) => {
            if result.as_deref() != Ok(output) {
                problems.push(format!("expected {:?}, got {:?}", output, result));
            }
        }
        Expected::Invalid(error) => {
            if result != Err(error) {
                problems.push(format!("expected {:?}, got {:?}", error, result));
            }
        }
        Expected::Formatted(output) => {
            let formatted = kind.format(input);
            if formatted != output {
                problems.push(format!("expected format {:?}, got {:?}", output, formatted));
            }
        }
    }

    let compact = kind.compact(input);
    if kind.compact(&compact) != compact {
        problems.push(format!("compact is not idempotent on {:?}", compact));
    }

    if let Ok(valid) = &result {
        let formatted = kind.format(input);
        if kind.compact(&formatted) != compact {
            problems.push(format!("format {:?} does not compact back", formatted));
        }
        if kind.validate(&formatted).as_ref() != Ok(valid) {
            problems.push(format!("format {:?} does not validate", formatted));
        }
        if let Some(engine) = kind.check_digit() {
            if let Some((payload, check)) = engine.split(&compact) {
                if !engine.is_check_digit(payload, check) {
                    let calculated = engine.calc_check_digit(payload);
                    problems.push(format!(
                        "check digit for {:?} is {:?}, expected {:?}",
                        payload, calculated, check
                    ));
                }
            }
        }
    }

    problems
        .into_iter()
        .map(|problem| Failure {
            kind: name,
            input,
            problem,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ValidationError};
    use crate::identifier::KindInfo;

    const BROKEN_INFO: KindInfo = KindInfo {
        name: "test.broken",
        country: None,
        tag: "broken",
        title: "Always accepts",
    };

    struct Broken;

    impl Identifier for Broken {
        fn info(&self) -> &KindInfo {
            &BROKEN_INFO
        }

        fn compact(&self, raw: &str) -> String {
            raw.to_string()
        }

        fn validate(&self, raw: &str) -> Result<String> {
            Ok(raw.to_string())
        }

        fn examples(&self) -> &'static [Example] {
            const EXAMPLES: &[Example] = &[
                Example::valid("1", "1"),
                Example::invalid("2", ValidationError::InvalidChecksum),
            ];
            EXAMPLES
        }
    }

    #[test]
    fn test_reports_broken_expectation() {
        let failures = check_kind(&Broken);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].input, "2");
        assert_eq!(failures[0].kind, "test.broken");
    }

    #[test]
    fn test_builtin_examples_pass() {
        let report = run(&Registry::new());
        assert!(report.is_ok(), "{:#?}", report.failures);
        assert_eq!(report.kinds, Registry::new().len());
        assert!(report.examples > report.kinds);
    }
}
