//! Report-to-Markdown conversion pipeline.
//!
//! Glue around the pure pieces: reads the report and template, runs
//! extraction and rendering, and writes the result to disk. Each stage is
//! logged; the first failure aborts the run before anything is written.

use crate::config::ConvertOptions;
use crate::extract::{ExtractError, ReportSummary, extract_test_results_info};
use crate::reader;
use crate::template::{Node, generate_markdown};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Report could not be read, parsed, or failed the shape check
    #[error("{0}")]
    Report(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Failed to read template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to prepare template data: {0}")]
    TemplateData(#[from] serde_json::Error),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write markdown to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convert one report file into a Markdown file.
///
/// Returns the path that was written.
pub fn convert_report_to_markdown(options: &ConvertOptions) -> Result<PathBuf, ConvertError> {
    info!("Starting mochawesome to Markdown conversion");

    info!("Reading test results from: {}", options.report_path.display());
    let report = reader::load_report(&options.report_path).map_err(ConvertError::Report)?;
    debug!("Report has {} root suites", report.results.len());

    info!("Extracting test results information");
    let summary = extract_test_results_info(&report)?;
    debug!(
        "Extracted {} passed, {} failed, {} pending, {} skipped tests",
        summary.passed_tests_count,
        summary.failed_tests_count,
        summary.skipped_tests_count,
        summary.skipped_other_tests_count
    );

    info!("Reading template: {}", options.template.describe());
    let template = options
        .template
        .load()
        .map_err(|source| ConvertError::Template { path: options.template.describe(), source })?;

    info!("Rendering template with test results");
    let markdown = render_markdown(&summary, &options.title, &template)?;

    ensure_output_directory(&options.output_path)?;

    info!("Writing markdown to: {}", options.output_path.display());
    fs::write(&options.output_path, markdown)
        .map_err(|source| ConvertError::Write { path: options.output_path.clone(), source })?;

    Ok(options.output_path.clone())
}

/// Merge the title into the summary and render `template` against it
pub fn render_markdown(summary: &ReportSummary, title: &str, template: &str) -> Result<String, ConvertError> {
    let mut data = Node::from(serde_json::to_value(summary)?);
    data.insert("title", Node::from(title));

    Ok(generate_markdown(&data, template))
}

/// Create the parent directory of `output_path` when it does not exist yet
fn ensure_output_directory(output_path: &Path) -> Result<(), ConvertError> {
    let Some(dir) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(());
    };

    info!("Ensuring output directory: {}", dir.display());
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ConvertError::OutputDir { path: dir.to_path_buf(), source })?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;
