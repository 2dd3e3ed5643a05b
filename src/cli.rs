use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "./md-reports/output.md";
pub const DEFAULT_TITLE: &str = "Test Report";

#[derive(Parser, Debug, Clone)]
#[command(name = "mochawesome-md")]
#[command(about = "Convert a mochawesome JSON report into a Markdown document")]
#[command(version)]
#[command(after_help = "Example: mochawesome-md -p mochawesome-report/mochawesome.json -o report.md")]
pub struct CliArgs {
    /// Path to the mochawesome JSON report
    #[arg(long, short = 'p', value_name = "PATH")]
    pub path: PathBuf,

    /// Path of the Markdown file to write (parent directories are created)
    #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Template to render; the built-in template is used when omitted
    /// Tags: {{key}} for values, {{key}}...{{/key}} to repeat over lists
    #[arg(long, short = 't', value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Title made available to the template as {{title}}
    #[arg(long, short = 'T', default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate that the input files exist before any work starts
    pub fn validate(&self) -> Result<(), String> {
        ensure_file_readable(&self.path, "Input report path")?;

        if let Some(ref template) = self.template {
            ensure_file_readable(template, "Template path")?;
        }

        if self.output.as_os_str().is_empty() {
            return Err("Output path must be a non-empty string".to_string());
        }

        Ok(())
    }
}

/// Check that `path` names an existing regular file
fn ensure_file_readable(path: &Path, label: &str) -> Result<(), String> {
    if path.as_os_str().is_empty() {
        return Err(format!("{} must be a non-empty string", label));
    }

    let metadata = fs::metadata(path).map_err(|e| format!("{} not accessible: {} ({})", label, path.display(), e))?;

    if !metadata.is_file() {
        return Err(format!("{} is not a file: {}", label, path.display()));
    }

    Ok(())
}
