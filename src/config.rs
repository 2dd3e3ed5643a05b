/// Configuration resolution module
///
/// This module handles:
/// - Building ConvertOptions from CLI arguments
/// - Choosing between a template file and the built-in template
use crate::cli::CliArgs;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Template shipped with the binary, used when no `--template` is given
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/default.md");

/// Where the template text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Builtin,
}

impl TemplateSource {
    /// Load the template text
    pub fn load(&self) -> std::io::Result<String> {
        match self {
            TemplateSource::File(path) => fs::read_to_string(path),
            TemplateSource::Builtin => Ok(BUILTIN_TEMPLATE.to_string()),
        }
    }

    /// Human-readable description for log lines
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::File(path) => path.display().to_string(),
            TemplateSource::Builtin => "<built-in template>".to_string(),
        }
    }
}

/// Fully resolved settings for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub report_path: PathBuf,
    pub output_path: PathBuf,
    pub template: TemplateSource,
    pub title: String,
}

/// Build ConvertOptions from CLI arguments
///
/// Arguments are expected to have passed [`CliArgs::validate`].
pub fn build_convert_options(args: &CliArgs) -> ConvertOptions {
    let template = match args.template {
        Some(ref path) => TemplateSource::File(path.clone()),
        None => TemplateSource::Builtin,
    };

    debug!("Resolved template source: {}", template.describe());

    ConvertOptions {
        report_path: args.path.clone(),
        output_path: args.output.clone(),
        template,
        title: args.title.clone(),
    }
}
