use std::path::PathBuf;

use thiserror::Error;

use crate::validator::ValidationIssue;

/// Main application error type that encompasses all possible failure modes
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A file could not be stat'd, opened, or read.
    #[error("{message}")]
    FileAccess {
        message: String,
        path: PathBuf,
        suggestion: Option<String>,
    },

    /// A file's byte length exceeds the configured ceiling.
    #[error("{message}")]
    FileSize {
        message: String,
        path: PathBuf,
        actual_bytes: u64,
        limit_bytes: u64,
    },

    /// A file was read but is not syntactically valid JSON.
    #[error("{message}")]
    Parse {
        message: String,
        path: PathBuf,
        /// 1-based line of the first syntax deviation.
        line: usize,
        /// 1-based column of the first syntax deviation.
        column: usize,
        /// Numbered source lines surrounding the failure, failing line marked.
        context: String,
        suggestion: String,
    },

    /// A schema file is unusable: unreadable, unparseable, or not a valid
    /// Draft 7 schema. Wraps the underlying failure in its message.
    #[error("{message}")]
    Schema { message: String, path: PathBuf },

    /// A document parsed cleanly but violates its schema.
    #[error("{message}")]
    Validation {
        message: String,
        path: PathBuf,
        /// Every violation found, in engine discovery order. Never empty.
        issues: Vec<ValidationIssue>,
    },
}

impl ValidationError {
    /// Path of the file the failure is attributed to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ValidationError::FileAccess { path, .. }
            | ValidationError::FileSize { path, .. }
            | ValidationError::Parse { path, .. }
            | ValidationError::Schema { path, .. }
            | ValidationError::Validation { path, .. } => path,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ValidationError>;
