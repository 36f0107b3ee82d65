//! Observability for read concerns
//!
//! Per OBSERVABILITY.md:
//! - Structured logging (JSON), one line per event
//! - Deterministic key ordering
//! - Synchronous, no buffering, no background threads
//!
//! Only failures are logged. Successful construction, encoding and
//! release are silent.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture_logs;
