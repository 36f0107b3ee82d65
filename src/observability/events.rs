//! Observable read concern events
//!
//! Each event carries a fixed severity so call sites cannot disagree on it.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The native resource refused a level string
    ReadConcernLevelRejected,
    /// A level string failed the strict level policy
    ReadConcernPolicyRejected,
    /// Merging a read concern into a command failed
    ReadConcernAppendFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ReadConcernLevelRejected => "READ_CONCERN_LEVEL_REJECTED",
            Event::ReadConcernPolicyRejected => "READ_CONCERN_POLICY_REJECTED",
            Event::ReadConcernAppendFailed => "READ_CONCERN_APPEND_FAILED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::ReadConcernLevelRejected | Event::ReadConcernPolicyRejected => Severity::Warn,
            Event::ReadConcernAppendFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
