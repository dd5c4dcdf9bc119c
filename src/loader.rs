//! Document loading and parsing
//!
//! Reads a file as UTF-8 text, parses it as JSON, and translates low-level
//! I/O and syntax failures into typed errors enriched with line/column
//! context and remediation hints.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::size_guard;

/// Lines shown on each side of the failing line in a parse-error context block.
const CONTEXT_LINES: usize = 2;

/// Ordered (pattern, suggestion) pairs matched case-insensitively against the
/// parser message; first match wins. Ordering matters since patterns overlap.
const SYNTAX_SUGGESTIONS: &[(&str, &str)] = &[
    (
        "expected `,`",
        "Check for missing commas between object properties or array elements",
    ),
    (
        "expected `:`",
        "Check for missing colons between object keys and values",
    ),
    (
        "key must be a string",
        "Check for missing quotes around object property names",
    ),
    (
        "eof while parsing a string",
        "Check for missing closing quotes in string values",
    ),
    (
        "trailing characters",
        "Check for extra characters after the JSON content",
    ),
];

const FALLBACK_SUGGESTION: &str = "Validate JSON syntax using a JSON formatter or validator";

/// A parsed JSON value tree plus the path it came from, for error attribution.
///
/// Never mutated after creation; the validator only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub value: Value,
    pub path: PathBuf,
}

/// Read and parse a JSON file.
///
/// When `size_limit` is `Some`, the file's length is checked before any
/// content is read; `None` means the size check was bypassed upstream.
pub fn load_document(path: &Path, size_limit: Option<u64>) -> Result<ParsedDocument> {
    if let Some(limit_bytes) = size_limit {
        size_guard::check(path, limit_bytes)?;
    }

    let text = fs::read_to_string(path).map_err(|err| read_error(path, &err))?;

    let value: Value =
        serde_json::from_str(&text).map_err(|err| parse_error(path, &text, &err))?;

    Ok(ParsedDocument {
        value,
        path: path.to_path_buf(),
    })
}

fn read_error(path: &Path, err: &std::io::Error) -> ValidationError {
    match err.kind() {
        ErrorKind::NotFound => ValidationError::FileAccess {
            message: format!("File not found: {}", path.display()),
            path: path.to_path_buf(),
            suggestion: Some(
                "Check that the file path is correct and the file exists".to_string(),
            ),
        },
        ErrorKind::PermissionDenied => ValidationError::FileAccess {
            message: format!("Permission denied reading file: {}", path.display()),
            path: path.to_path_buf(),
            suggestion: Some(
                "Check file permissions or run with appropriate privileges".to_string(),
            ),
        },
        ErrorKind::InvalidData => ValidationError::FileAccess {
            message: format!("File is not valid UTF-8 text: {}", path.display()),
            path: path.to_path_buf(),
            suggestion: None,
        },
        _ => ValidationError::FileAccess {
            message: format!("Unexpected error reading file {}: {}", path.display(), err),
            path: path.to_path_buf(),
            suggestion: None,
        },
    }
}

fn parse_error(path: &Path, text: &str, err: &serde_json::Error) -> ValidationError {
    let line = err.line();
    let column = err.column();
    let raw = err.to_string();
    // serde_json appends " at line L column C"; the position is carried
    // separately, so strip the suffix from the headline.
    let detail = raw.split(" at line ").next().unwrap_or(&raw).to_string();

    ValidationError::Parse {
        message: format!(
            "Invalid JSON in file {}: {} at line {}, column {}",
            path.display(),
            detail,
            line,
            column
        ),
        path: path.to_path_buf(),
        line,
        column,
        context: error_context(text, line, CONTEXT_LINES),
        suggestion: syntax_suggestion(&raw).to_string(),
    }
}

/// Render numbered source lines around `line_no` (1-based), the failing line
/// marked with `>>>`. The window is clamped at the edges of the text.
fn error_context(text: &str, line_no: usize, context_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return String::new();
    }

    let start = line_no.saturating_sub(context_lines + 1);
    let end = lines.len().min(line_no + context_lines);

    let mut rendered = Vec::with_capacity(end - start);
    for (index, content) in lines.iter().enumerate().take(end).skip(start) {
        let marker = if index + 1 == line_no { ">>>" } else { "   " };
        rendered.push(format!("{} {:3}: {}", marker, index + 1, content));
    }
    rendered.join("\n")
}

fn syntax_suggestion(parser_message: &str) -> &'static str {
    let lowered = parser_message.to_ascii_lowercase();
    SYNTAX_SUGGESTIONS
        .iter()
        .find(|(pattern, _)| lowered.contains(pattern))
        .map(|(_, suggestion)| *suggestion)
        .unwrap_or(FALLBACK_SUGGESTION)
}
