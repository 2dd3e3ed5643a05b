/// Report loading
///
/// This module handles:
/// - Reading and parsing the JSON report file
/// - Checking the report has the fields extraction relies on
/// - Converting the checked JSON into typed structures
use crate::types::TestReport;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Stats keys that must be present and non-null, checked in this order
const REQUIRED_STATS: [&str; 4] = ["start", "duration", "tests", "other"];

/// Read a file and parse it as JSON
pub fn read_json_file(path: &Path) -> Result<Value, String> {
    debug!("Reading JSON file: {}", path.display());

    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read JSON file: {} ({})", path.display(), e))?;

    let parsed = parse_unbounded(&content)
        .map_err(|e| format!("Error while parsing JSON file: {} ({})", path.display(), e))?;

    debug!("Successfully parsed JSON file: {}", path.display());
    Ok(parsed)
}

/// Parse JSON with serde_json's nesting limit lifted; suite trees have no depth bound
fn parse_unbounded(content: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Check the shape of a parsed report and convert it to a [`TestReport`]
///
/// Only presence is checked up front; type mismatches surface from the
/// typed conversion afterwards.
pub fn validate_test_results_schema(value: Value) -> Result<TestReport, String> {
    let Some(object) = value.as_object() else {
        return Err("Test results must be an object".to_string());
    };

    if !object.get("results").is_some_and(Value::is_array) {
        return Err("Test results must include a \"results\" array".to_string());
    }

    let Some(stats) = object.get("stats").and_then(Value::as_object) else {
        return Err("Test results must include a \"stats\" object".to_string());
    };

    for key in REQUIRED_STATS {
        if stats.get(key).is_none_or(Value::is_null) {
            return Err(format!("Stats missing required field \"{}\"", key));
        }
    }

    serde_json::from_value(value).map_err(|e| format!("Test results have an unexpected shape: {}", e))
}

/// Read, check and convert a report file in one go
pub fn load_report(path: &Path) -> Result<TestReport, String> {
    validate_test_results_schema(read_json_file(path)?)
}
