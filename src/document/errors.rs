//! # Document Errors

use thiserror::Error;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised while building or parsing a document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input was not valid JSON, or a value could not be serialized
    #[error("Document encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The value is valid but is not a key/value object
    #[error("Expected an object, found {0}")]
    NotAnObject(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_object_message() {
        let err = DocumentError::NotAnObject("string");
        assert_eq!(err.to_string(), "Expected an object, found string");
    }
}
