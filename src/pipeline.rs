//! Validation pipeline
//!
//! Composes size gating, document loading, schema loading, and schema
//! validation into the single "validate this file against this optional
//! schema" operation the CLI calls. The flow is linear: any stage failure
//! short-circuits immediately, there are no retries and no partial results.

use std::path::PathBuf;

use crate::error::{Result, ValidationError};
use crate::loader;
use crate::schema_loader;
use crate::validator::{self, ValidationOutcome};

/// Default file size ceiling: 100 MiB.
pub const DEFAULT_SIZE_LIMIT_BYTES: u64 = 100 * 1024 * 1024;

/// One invocation's worth of input: what to validate, against what, and how
/// the size guard is configured. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationTarget {
    pub document_path: PathBuf,
    pub schema_path: Option<PathBuf>,
    pub size_limit_bytes: u64,
    pub skip_size_check: bool,
}

impl ValidationTarget {
    /// Target with the default size limit, no schema, size check enabled.
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
            schema_path: None,
            size_limit_bytes: DEFAULT_SIZE_LIMIT_BYTES,
            skip_size_check: false,
        }
    }
}

/// Validate a JSON file, optionally against a schema.
///
/// Without a schema path, a successful document load is itself terminal
/// success (syntax-only validation).
pub fn run(target: &ValidationTarget) -> Result<()> {
    let size_limit = if target.skip_size_check {
        None
    } else {
        Some(target.size_limit_bytes)
    };

    let document = loader::load_document(&target.document_path, size_limit)?;

    let schema_path = match &target.schema_path {
        Some(path) => path,
        None => return Ok(()),
    };

    let schema = schema_loader::load_schema(schema_path, size_limit)?;

    match validator::check(&document, &schema) {
        ValidationOutcome::Valid => Ok(()),
        ValidationOutcome::Invalid { issues } => {
            let first = issues
                .first()
                .map(|issue| issue.message.clone())
                .unwrap_or_default();
            Err(ValidationError::Validation {
                message: format!("JSON validation failed: {}", first),
                path: target.document_path.clone(),
                issues,
            })
        }
    }
}
