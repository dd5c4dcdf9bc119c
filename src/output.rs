//! Output and Reporting
//!
//! This module formats pipeline results for human consumption: success
//! confirmations, failure diagnostics per error kind, and verbose detail.

use atty;
use std::path::Path;

use crate::cli::VerbosityLevel;
use crate::error::ValidationError;
use crate::size_guard::format_megabytes;

/// Output formatter for human-readable results
pub struct Output {
    verbosity: VerbosityLevel,
    color_stdout: bool,
    color_stderr: bool,
}

impl Output {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            color_stdout: atty::is(atty::Stream::Stdout),
            color_stderr: atty::is(atty::Stream::Stderr),
        }
    }

    fn colorize(&self, text: &str, color: &str, on_stderr: bool) -> String {
        let enabled = if on_stderr {
            self.color_stderr
        } else {
            self.color_stdout
        };
        if enabled {
            format!("\x1b[{}m{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    /// Confirmation printed to stdout on success.
    pub fn format_success(&self, json_file: &Path, schema: Option<&Path>) -> String {
        let check = self.colorize("✓ ", "32", false);
        match schema {
            Some(schema_path) => format!(
                "{}JSON file '{}' is valid according to schema '{}'",
                check,
                json_file.display(),
                schema_path.display()
            ),
            None => format!("{}JSON file '{}' has valid syntax", check, json_file.display()),
        }
    }

    /// Diagnostic printed to stderr on failure.
    pub fn format_error(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::Parse {
                message,
                context,
                suggestion,
                ..
            } => {
                let mut output = format!(
                    "{}{}",
                    self.colorize("✗ JSON Parse Error: ", "31", true),
                    message
                );
                if !context.is_empty() {
                    output.push_str(&format!("\nContext:\n{}", context));
                }
                if self.verbosity >= VerbosityLevel::Verbose {
                    output.push_str(&format!(
                        "\n{}{}",
                        self.colorize("💡 Suggestion: ", "33", true),
                        suggestion
                    ));
                }
                output
            }

            ValidationError::Validation {
                message, issues, ..
            } => {
                let mut output = format!(
                    "{}{}",
                    self.colorize("✗ Validation Error: ", "31", true),
                    message
                );
                if self.verbosity >= VerbosityLevel::Verbose && !issues.is_empty() {
                    output.push_str("\n\nDetailed validation errors:");
                    for (index, issue) in issues.iter().enumerate() {
                        output.push_str(&format!("\n  {}. {}", index + 1, issue));
                    }
                }
                output
            }

            ValidationError::Schema { message, .. } => {
                format!(
                    "{}{}",
                    self.colorize("✗ Schema Error: ", "31", true),
                    message
                )
            }

            ValidationError::FileAccess {
                message,
                suggestion,
                ..
            } => {
                let mut output = format!(
                    "{}{}",
                    self.colorize("✗ File Error: ", "31", true),
                    message
                );
                if self.verbosity >= VerbosityLevel::Verbose {
                    if let Some(suggestion) = suggestion {
                        output.push_str(&format!(
                            "\n{}{}",
                            self.colorize("💡 Suggestion: ", "33", true),
                            suggestion
                        ));
                    }
                }
                output
            }

            ValidationError::FileSize {
                message,
                actual_bytes,
                limit_bytes,
                ..
            } => {
                let mut output = format!(
                    "{}{}",
                    self.colorize("✗ File Size Error: ", "31", true),
                    message
                );
                if self.verbosity >= VerbosityLevel::Verbose {
                    output.push_str(&format!("\n   File size: {}", format_megabytes(*actual_bytes)));
                    output.push_str(&format!("\n   Size limit: {}", format_megabytes(*limit_bytes)));
                    output.push_str("\n   Use --no-size-check to bypass this limit");
                }
                output
            }
        }
    }

    /// Rendering for faults outside the error taxonomy, caught only at the
    /// outermost boundary. Detail is shown in verbose mode only.
    pub fn format_unexpected(&self, detail: &str) -> String {
        let mut output = format!(
            "{}{}",
            self.colorize("✗ Unexpected Error: ", "31", true),
            "an internal failure interrupted validation"
        );
        if self.verbosity >= VerbosityLevel::Verbose {
            output.push_str(&format!("\nDetail: {}", detail));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ValidationIssue;
    use std::path::PathBuf;

    fn plain_output(verbosity: VerbosityLevel) -> Output {
        // Force colors off so assertions are stable regardless of TTY.
        Output {
            verbosity,
            color_stdout: false,
            color_stderr: false,
        }
    }

    #[test]
    fn test_success_without_schema() {
        let output = plain_output(VerbosityLevel::Normal);
        let formatted = output.format_success(Path::new("data.json"), None);
        assert_eq!(formatted, "✓ JSON file 'data.json' has valid syntax");
    }

    #[test]
    fn test_success_with_schema() {
        let output = plain_output(VerbosityLevel::Normal);
        let formatted =
            output.format_success(Path::new("data.json"), Some(Path::new("schema.json")));
        assert!(formatted.contains("valid according to schema 'schema.json'"));
    }

    #[test]
    fn test_parse_error_includes_context_always() {
        let output = plain_output(VerbosityLevel::Normal);
        let error = ValidationError::Parse {
            message: "Invalid JSON in file bad.json: expected `:` at line 1, column 5".to_string(),
            path: PathBuf::from("bad.json"),
            line: 1,
            column: 5,
            context: ">>>   1: {\"a\" 1}".to_string(),
            suggestion: "Check for missing colons between object keys and values".to_string(),
        };
        let formatted = output.format_error(&error);
        assert!(formatted.contains("JSON Parse Error"));
        assert!(formatted.contains("Context:"));
        assert!(!formatted.contains("Suggestion:"));
    }

    #[test]
    fn test_parse_error_suggestion_in_verbose() {
        let output = plain_output(VerbosityLevel::Verbose);
        let error = ValidationError::Parse {
            message: "Invalid JSON in file bad.json: expected `:` at line 1, column 5".to_string(),
            path: PathBuf::from("bad.json"),
            line: 1,
            column: 5,
            context: String::new(),
            suggestion: "Check for missing colons between object keys and values".to_string(),
        };
        let formatted = output.format_error(&error);
        assert!(formatted.contains("Suggestion: Check for missing colons"));
    }

    #[test]
    fn test_validation_error_issues_only_in_verbose() {
        let error = ValidationError::Validation {
            message: "JSON validation failed: 'name' is a required property".to_string(),
            path: PathBuf::from("data.json"),
            issues: vec![ValidationIssue {
                path: "root".to_string(),
                message: "'name' is a required property".to_string(),
            }],
        };

        let normal = plain_output(VerbosityLevel::Normal).format_error(&error);
        assert!(normal.contains("Validation Error"));
        assert!(!normal.contains("Detailed validation errors"));

        let verbose = plain_output(VerbosityLevel::Verbose).format_error(&error);
        assert!(verbose.contains("Detailed validation errors:"));
        assert!(verbose.contains("1. At 'root':"));
    }

    #[test]
    fn test_file_size_figures_only_in_verbose() {
        let error = ValidationError::FileSize {
            message: "File size (200.0MB) exceeds limit (100.0MB)".to_string(),
            path: PathBuf::from("big.json"),
            actual_bytes: 200 * 1024 * 1024,
            limit_bytes: 100 * 1024 * 1024,
        };

        let normal = plain_output(VerbosityLevel::Normal).format_error(&error);
        assert!(!normal.contains("Size limit:"));

        let verbose = plain_output(VerbosityLevel::Verbose).format_error(&error);
        assert!(verbose.contains("File size: 200.0MB"));
        assert!(verbose.contains("Size limit: 100.0MB"));
        assert!(verbose.contains("--no-size-check"));
    }

    #[test]
    fn test_unexpected_error_detail_gated_by_verbosity() {
        let normal = plain_output(VerbosityLevel::Normal).format_unexpected("boom");
        assert!(normal.contains("Unexpected Error"));
        assert!(!normal.contains("boom"));

        let verbose = plain_output(VerbosityLevel::Verbose).format_unexpected("boom");
        assert!(verbose.contains("Detail: boom"));
    }
}
