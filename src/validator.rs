//! Instance-against-schema validation
//!
//! Checks a parsed document against a compiled schema, collecting every
//! violation in the tree rather than stopping at the first. Each issue
//! carries the JSON path from the document root and the engine's message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loader::ParsedDocument;
use crate::schema_loader::ParsedSchema;

/// Path token reported when a violation applies to the whole document.
const ROOT_PATH: &str = "root";

/// A single schema violation located within the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Property names and array indices from the document root joined by
    /// `" -> "`, or `root` for whole-document violations.
    pub path: String,
    /// Human-readable constraint message from the validation engine.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "At '{}': {}", self.path, self.message)
    }
}

/// Result of checking a document against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// The document satisfies every schema constraint.
    Valid,
    /// One or more constraints were violated. Never constructed empty.
    Invalid { issues: Vec<ValidationIssue> },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid { issues } => issues,
        }
    }
}

/// Check a document against a schema, collecting every violation.
///
/// Issue order is the engine's traversal order and is deterministic for
/// identical (document, schema) pairs.
pub fn check(document: &ParsedDocument, schema: &ParsedSchema) -> ValidationOutcome {
    match schema.validator().validate(&document.value) {
        Ok(()) => ValidationOutcome::Valid,
        Err(errors) => {
            let issues: Vec<ValidationIssue> = errors
                .map(|error| ValidationIssue {
                    path: render_instance_path(&error.instance_path.to_string()),
                    message: error.to_string(),
                })
                .collect();
            if issues.is_empty() {
                ValidationOutcome::Valid
            } else {
                ValidationOutcome::Invalid { issues }
            }
        }
    }
}

/// Convert a JSON Pointer rendering (`/person/name`, `""` for the root) into
/// the `person -> name` form, decoding the `~1`/`~0` escapes.
fn render_instance_path(pointer: &str) -> String {
    if pointer.is_empty() {
        return ROOT_PATH.to_string();
    }
    pointer
        .trim_start_matches('/')
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(" -> ")
}
