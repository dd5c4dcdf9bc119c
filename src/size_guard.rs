//! File size gating
//!
//! Probes a file's byte length before any content is read, so oversized
//! inputs fail fast instead of being loaded into memory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, ValidationError};

/// Check a file's length against a byte ceiling without reading its content.
///
/// A missing file is reported as a file access failure, not a size failure.
/// A file of exactly `limit_bytes` passes.
pub fn check(path: &Path, limit_bytes: u64) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|err| probe_error(path, &err))?;

    let actual_bytes = metadata.len();
    if actual_bytes > limit_bytes {
        return Err(ValidationError::FileSize {
            message: format!(
                "File size ({}) exceeds limit ({})",
                format_megabytes(actual_bytes),
                format_megabytes(limit_bytes)
            ),
            path: path.to_path_buf(),
            actual_bytes,
            limit_bytes,
        });
    }

    Ok(())
}

/// Render a byte count in megabytes with one decimal, e.g. `12.5MB`.
pub(crate) fn format_megabytes(bytes: u64) -> String {
    format!("{:.1}MB", bytes as f64 / (1024.0 * 1024.0))
}

fn probe_error(path: &Path, err: &std::io::Error) -> ValidationError {
    match err.kind() {
        ErrorKind::NotFound => ValidationError::FileAccess {
            message: format!("File not found: {}", path.display()),
            path: path.to_path_buf(),
            suggestion: Some("Verify the file path and that the file exists".to_string()),
        },
        _ => ValidationError::FileAccess {
            message: format!("Unable to read file metadata for {}: {}", path.display(), err),
            path: path.to_path_buf(),
            suggestion: None,
        },
    }
}
