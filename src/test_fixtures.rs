/// Report fixtures shared by unit tests
///
/// The JSON lives under `tests/fixtures` so the binary-level tests read the
/// very same reports.
use crate::types::TestReport;
use serde_json::Value;

pub const SINGLE_OUTCOME: &str = include_str!("../tests/fixtures/single-outcome.json");
pub const MULTI_SUITE: &str = include_str!("../tests/fixtures/multi-suite.json");
pub const NESTED_SUITES: &str = include_str!("../tests/fixtures/nested-suites.json");

/// One suite, one test per outcome, file `/tests/suite-a.js`
pub fn single_outcome_report() -> TestReport {
    serde_json::from_str(SINGLE_OUTCOME).expect("single-outcome fixture should parse")
}

/// Two root suites, `suite-b.js` and `suite-c.js`
pub fn multi_suite_report() -> TestReport {
    serde_json::from_str(MULTI_SUITE).expect("multi-suite fixture should parse")
}

/// Three levels of suites under `/tests/root.js`
pub fn nested_suites_report() -> TestReport {
    serde_json::from_str(NESTED_SUITES).expect("nested-suites fixture should parse")
}

pub fn single_outcome_value() -> Value {
    serde_json::from_str(SINGLE_OUTCOME).expect("single-outcome fixture should parse")
}

/// Minimal test record JSON
pub fn test_json(uuid: &str, title: &str) -> Value {
    serde_json::json!({ "uuid": uuid, "title": title })
}
