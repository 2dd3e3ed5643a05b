//! Flattening of the suite tree into per-outcome test lists.
//!
//! mochawesome stores outcomes as uuid lists on each suite, pointing into that
//! suite's own `tests`. This module walks the tree breadth-first and resolves
//! those references into [`ExtractedTest`]s carrying the test file path.

use crate::types::{ExtractedTest, OutcomeType, Suite, TestReport};
use serde::Serialize;
use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised while resolving outcome references
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// An outcome list names a uuid missing from the same suite's `tests`
    #[error("Test with uuid {uuid} not found for type {outcome}")]
    TestNotFound { uuid: String, outcome: OutcomeType },
}

/// Everything a template can reference about a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub start_date: String,
    /// `start_date` in the local time zone, or verbatim when it does not parse
    pub start_date_local: String,
    pub duration: serde_json::Number,
    pub total_tests: u64,
    pub other_tests_count: u64,

    pub passed_tests_count: usize,
    pub failed_tests_count: usize,
    pub skipped_tests_count: usize,
    pub skipped_other_tests_count: usize,

    pub passed_exists: bool,
    pub failed_exists: bool,
    pub skipped_exists: bool,
    pub skipped_other_exists: bool,

    pub passed_tests: Vec<ExtractedTest>,
    pub failed_tests: Vec<ExtractedTest>,
    /// Tests from the `pending` lists
    pub skipped_tests: Vec<ExtractedTest>,
    /// Tests from the `skipped` lists (skipped by the framework)
    pub skipped_other_tests: Vec<ExtractedTest>,
}

/// Collect every test of `outcome` across a forest of suites.
///
/// Suites are visited breadth-first: all roots first, then their children in
/// order, and so on. A suite's own matches are emitted before any of its
/// children are visited. Each test gets the nearest non-empty `file` of its
/// suite or an ancestor as `path`.
///
/// References are resolved only against the referencing suite's own `tests`;
/// a dangling uuid aborts the whole walk.
pub fn collect_tests_by_type(outcome: OutcomeType, suites: &[Suite]) -> Result<Vec<ExtractedTest>, ExtractError> {
    let mut collected = Vec::new();
    let mut queue: VecDeque<(&Suite, &str)> = suites.iter().map(|suite| (suite, suite.file.as_str())).collect();

    while let Some((suite, path)) = queue.pop_front() {
        for uuid in suite.uuids_for(outcome) {
            let test = suite
                .tests
                .iter()
                .find(|test| &test.uuid == uuid)
                .ok_or_else(|| ExtractError::TestNotFound { uuid: uuid.clone(), outcome })?;
            collected.push(ExtractedTest::new(test, path));
        }

        for child in &suite.suites {
            queue.push_back((child, child.effective_path(path)));
        }
    }

    Ok(collected)
}

/// Build the summary for a whole report.
///
/// Stats are copied as they are; the four outcome lists come from
/// [`collect_tests_by_type`] in the order passes, failures, pending, skipped.
pub fn extract_test_results_info(report: &TestReport) -> Result<ReportSummary, ExtractError> {
    let passed_tests = collect_tests_by_type(OutcomeType::Passes, &report.results)?;
    let failed_tests = collect_tests_by_type(OutcomeType::Failures, &report.results)?;
    let skipped_tests = collect_tests_by_type(OutcomeType::Pending, &report.results)?;
    let skipped_other_tests = collect_tests_by_type(OutcomeType::Skipped, &report.results)?;

    let stats = &report.stats;

    Ok(ReportSummary {
        start_date: stats.start.clone(),
        start_date_local: format_local_start(&stats.start),
        duration: stats.duration.clone(),
        total_tests: stats.tests,
        other_tests_count: stats.other,
        passed_tests_count: passed_tests.len(),
        failed_tests_count: failed_tests.len(),
        skipped_tests_count: skipped_tests.len(),
        skipped_other_tests_count: skipped_other_tests.len(),
        passed_exists: !passed_tests.is_empty(),
        failed_exists: !failed_tests.is_empty(),
        skipped_exists: !skipped_tests.is_empty(),
        skipped_other_exists: !skipped_other_tests.is_empty(),
        passed_tests,
        failed_tests,
        skipped_tests,
        skipped_other_tests,
    })
}

fn format_local_start(start: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(start)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| start.to_string())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
