use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Show standard information
    #[default]
    Normal,
    /// Show detailed diagnostics: issue lists, suggestions, size figures
    Verbose,
}

/// Main application configuration derived from CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub json_file: PathBuf,
    pub schema: Option<PathBuf>,
    pub verbose: bool,
    pub max_size_mb: u64,
    pub no_size_check: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_file: cli.json_file.clone(),
            schema: cli.schema.clone(),
            verbose: cli.verbose,
            max_size_mb: cli.max_size,
            no_size_check: cli.no_size_check,
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    pub fn size_limit_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }
}

/// JSON validation tool
#[derive(Parser, Debug, Clone)]
#[command(name = "json-validate")]
#[command(about = "Validate JSON files for syntax and against optional JSON schemas")]
#[command(version)]
pub struct Cli {
    /// JSON file to validate
    #[arg(value_name = "JSON_FILE")]
    pub json_file: PathBuf,

    /// JSON schema file to validate against
    #[arg(short = 's', long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Show detailed validation errors
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Maximum file size in MB
    #[arg(long = "max-size", default_value = "100", value_name = "MB")]
    pub max_size: u64,

    /// Skip file size validation
    #[arg(long = "no-size-check")]
    pub no_size_check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Shell-level argument checks performed before the pipeline runs.
    pub fn validate(&self) -> Result<(), String> {
        if !self.json_file.exists() {
            return Err(format!(
                "JSON file does not exist: {}",
                self.json_file.display()
            ));
        }
        if let Some(schema) = &self.schema {
            if !schema.exists() {
                return Err(format!("Schema file does not exist: {}", schema.display()));
            }
        }
        Ok(())
    }
}
