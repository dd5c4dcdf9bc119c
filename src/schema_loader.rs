//! Schema loading and self-validation
//!
//! Wraps the document loader: a schema file must parse as JSON and then
//! compile as a Draft 7 schema before it can be used for validation. Any
//! failure along the way is reported as a single schema error so callers
//! only branch on one kind for "this schema file is unusable".

use std::path::Path;

use jsonschema::Validator;

use crate::error::{Result, ValidationError};
use crate::loader::{self, ParsedDocument};

/// A parsed JSON document that compiled as a Draft 7 schema.
///
/// Holding the compiled validator is the guarantee that distinguishes this
/// from a plain [`ParsedDocument`].
#[derive(Debug)]
pub struct ParsedSchema {
    document: ParsedDocument,
    compiled: Validator,
}

impl ParsedSchema {
    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }

    pub fn validator(&self) -> &Validator {
        &self.compiled
    }

    pub fn path(&self) -> &Path {
        &self.document.path
    }
}

/// Load a JSON Schema file and verify it is itself a valid Draft 7 schema.
pub fn load_schema(path: &Path, size_limit: Option<u64>) -> Result<ParsedSchema> {
    let document = loader::load_document(path, size_limit).map_err(|err| {
        ValidationError::Schema {
            message: format!("Failed to load schema: {}", err),
            path: path.to_path_buf(),
        }
    })?;

    // Compiling under a pinned draft rejects malformed schemas (unknown
    // "type" names, wrong keyword shapes) with the meta-level message.
    let compiled =
        jsonschema::draft7::new(&document.value).map_err(|err| ValidationError::Schema {
            message: format!("Invalid JSON schema in {}: {}", path.display(), err),
            path: path.to_path_buf(),
        })?;

    Ok(ParsedSchema { document, compiled })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with_content(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_schema() {
        let file = file_with_content(
            r#"{"type": "object", "properties": {"name": {"type": "string"}}, "required": ["name"]}"#,
        );
        let schema = load_schema(file.path(), None).unwrap();
        assert_eq!(schema.path(), file.path());
        assert!(schema.document().value.is_object());
    }

    #[test]
    fn test_unknown_type_name_is_schema_error() {
        let file = file_with_content(r#"{"type": "not_a_real_type"}"#);
        let err = load_schema(file.path(), None).unwrap_err();
        match err {
            ValidationError::Schema { message, .. } => {
                assert!(message.contains("Invalid JSON schema"));
            }
            other => panic!("Expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_schema_wrapped_as_schema_error() {
        let file = file_with_content(r#"{"type": "#);
        let err = load_schema(file.path(), None).unwrap_err();
        match err {
            ValidationError::Schema { message, .. } => {
                assert!(message.contains("Failed to load schema:"));
            }
            other => panic!("Expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_schema_file_wrapped_as_schema_error() {
        let err = load_schema(Path::new("/nonexistent/schema.json"), None).unwrap_err();
        match err {
            ValidationError::Schema { message, .. } => {
                assert!(message.contains("Failed to load schema:"));
                assert!(message.contains("File not found"));
            }
            other => panic!("Expected Schema, got {:?}", other),
        }
    }
}
