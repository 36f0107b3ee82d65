//! Read concern error types following ERRORS.md
//!
//! Error codes:
//! - AERO_READ_CONCERN_INVALID_LEVEL (ERROR severity)
//! - AERO_READ_CONCERN_UNKNOWN_LEVEL (ERROR severity)
//! - AERO_READ_CONCERN_APPEND_FAILED (ERROR severity)
//!
//! All read concern errors surface immediately to the caller. There is no
//! retry and no silent recovery.

use std::fmt;

use thiserror::Error;

use crate::observability::Severity;

/// Read concern error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadConcernErrorCode {
    /// The native resource rejected the level string
    AeroReadConcernInvalidLevel,
    /// The level is outside the recognized set (strict policy only)
    AeroReadConcernUnknownLevel,
    /// Merging into a command document failed
    AeroReadConcernAppendFailed,
}

impl ReadConcernErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ReadConcernErrorCode::AeroReadConcernInvalidLevel => "AERO_READ_CONCERN_INVALID_LEVEL",
            ReadConcernErrorCode::AeroReadConcernUnknownLevel => "AERO_READ_CONCERN_UNKNOWN_LEVEL",
            ReadConcernErrorCode::AeroReadConcernAppendFailed => "AERO_READ_CONCERN_APPEND_FAILED",
        }
    }

    /// Caller input problems, never fatal.
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ReadConcernErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error raised by read concern construction or append.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] {code}: {message}", .code.severity())]
pub struct ReadConcernError {
    code: ReadConcernErrorCode,
    message: String,
}

impl ReadConcernError {
    pub fn new(code: ReadConcernErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The native resource refused `level`.
    pub fn invalid_level(level: &str) -> Self {
        Self::new(
            ReadConcernErrorCode::AeroReadConcernInvalidLevel,
            format!("Failed to set read concern level to '{}'", level),
        )
    }

    /// `level` is not one of the recognized names.
    pub fn unknown_level(level: &str) -> Self {
        Self::new(
            ReadConcernErrorCode::AeroReadConcernUnknownLevel,
            format!("Unrecognized read concern level '{}'", level),
        )
    }

    /// Appending to `command` failed. The document is rendered for diagnosis.
    pub fn append_failed(command: impl fmt::Display) -> Self {
        Self::new(
            ReadConcernErrorCode::AeroReadConcernAppendFailed,
            format!("Error appending read concern to document {}", command),
        )
    }

    pub fn code(&self) -> ReadConcernErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

/// Result type for read concern operations
pub type ReadConcernResult<T> = Result<T, ReadConcernError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_includes_value() {
        let err = ReadConcernError::invalid_level("bogus");
        assert_eq!(err.code(), ReadConcernErrorCode::AeroReadConcernInvalidLevel);
        assert!(err.message().contains("'bogus'"));
    }

    #[test]
    fn test_append_failed_includes_document() {
        let err = ReadConcernError::append_failed(r#"{"level":"local"}"#);
        assert!(err.message().contains(r#"{"level":"local"}"#));
    }

    #[test]
    fn test_display_format() {
        let err = ReadConcernError::unknown_level("eventual");
        let display = err.to_string();
        assert!(display.starts_with("[ERROR] AERO_READ_CONCERN_UNKNOWN_LEVEL: "));
        assert!(display.contains("eventual"));
    }

    #[test]
    fn test_errors_are_not_fatal() {
        assert_eq!(ReadConcernError::invalid_level("x").severity(), Severity::Error);
    }
}
