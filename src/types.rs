/// Core data structures for mochawesome reports
///
/// This module defines the report tree as it is read from JSON (suites, tests,
/// stats) and the flattened shapes produced from it.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Top-level mochawesome report after the schema check
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestReport {
    /// Root suites, one per test file in a typical run
    pub results: Vec<Suite>,

    /// Aggregate run statistics
    pub stats: Stats,
}

/// Run statistics copied into the summary as-is
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stats {
    pub start: String,                // "2024-01-01T00:00:00.000Z"
    pub duration: serde_json::Number, // kept exactly as the reporter wrote it
    pub tests: u64,
    pub other: u64,
}

/// One node of the suite tree
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Suite {
    /// Test file of the suite; empty when the reporter left it blank or null
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub suites: Vec<Suite>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tests: Vec<TestRecord>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub passes: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub failures: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pending: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub skipped: Vec<String>,
}

impl Suite {
    /// uuids this suite lists under the given outcome
    pub fn uuids_for(&self, outcome: OutcomeType) -> &[String] {
        match outcome {
            OutcomeType::Passes => &self.passes,
            OutcomeType::Failures => &self.failures,
            OutcomeType::Pending => &self.pending,
            OutcomeType::Skipped => &self.skipped,
        }
    }

    /// Path children inherit: the suite's own file when set, otherwise the parent's
    pub fn effective_path<'a>(&'a self, inherited: &'a str) -> &'a str {
        if self.file.is_empty() { inherited } else { &self.file }
    }
}

/// A single test as the reporter recorded it
///
/// Only `uuid` and `title` are interpreted; every other field is carried
/// through untouched so templates can reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub uuid: String,

    #[serde(default)]
    pub title: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A test record tagged with the file path of the suite it was found in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedTest {
    #[serde(flatten)]
    pub test: TestRecord,

    pub path: String,
}

impl ExtractedTest {
    /// Copy `test` and attach `path`, replacing any `path` field the record had
    pub fn new(test: &TestRecord, path: &str) -> Self {
        let mut test = test.clone();
        test.extra.remove("path");
        Self { test, path: path.to_string() }
    }

    #[cfg(test)]
    pub fn uuid(&self) -> &str {
        &self.test.uuid
    }
}

/// The four outcome lists mochawesome keeps on every suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeType {
    Passes,
    Failures,
    Pending,
    /// Skipped by the framework (e.g. after a failing hook), not by `it.skip`
    Skipped,
}

impl OutcomeType {
    #[cfg(test)]
    pub const ALL: [OutcomeType; 4] =
        [OutcomeType::Passes, OutcomeType::Failures, OutcomeType::Pending, OutcomeType::Skipped];

    /// Field name of the outcome list in the report JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Passes => "passes",
            OutcomeType::Failures => "failures",
            OutcomeType::Pending => "pending",
            OutcomeType::Skipped => "skipped",
        }
    }
}

impl fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
