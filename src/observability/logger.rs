//! Structured JSON logger
//!
//! Per OBSERVABILITY.md:
//! - `event` first, then `severity`, then fields sorted by key
//! - One log line = one event
//! - WARN and above go to stderr, everything else to stdout

use std::fmt;
use std::io::{self, Write};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace = 0,
    Info = 1,
    /// Caller error, operation refused
    Warn = 2,
    /// Operation failed
    Error = 3,
    Fatal = 4,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger.
pub struct Logger;

impl Logger {
    /// Log `event` at its own severity.
    pub fn log(event: Event, fields: &[(&str, &str)]) {
        let line = Self::render(event, fields);
        if capture::record(&line) {
            return;
        }
        // Logging must never fail the operation being logged
        let _ = if event.severity() >= Severity::Warn {
            Self::log_to_writer(&line, &mut io::stderr().lock())
        } else {
            Self::log_to_writer(&line, &mut io::stdout().lock())
        };
    }

    /// Write one rendered line in a single call.
    fn log_to_writer<W: Write>(line: &str, writer: &mut W) -> io::Result<()> {
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }

    /// Render one newline-terminated JSON log line.
    pub fn render(event: Event, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":");
        push_json_str(&mut line, event.as_str());
        line.push_str(",\"severity\":");
        push_json_str(&mut line, event.severity().as_str());
        for (key, value) in sorted {
            line.push(',');
            push_json_str(&mut line, key);
            line.push(':');
            push_json_str(&mut line, value);
        }
        line.push_str("}\n");
        line
    }
}

/// Redirect log lines emitted on the current thread into a buffer.
#[cfg(test)]
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    capture::LINES.with(|lines| *lines.borrow_mut() = Some(Vec::new()));
    let result = f();
    let lines = capture::LINES.with(|lines| lines.borrow_mut().take().unwrap_or_default());
    (result, lines)
}


#[cfg(not(test))]
mod capture {
    pub(super) fn record(_line: &str) -> bool {
        false
    }
}

fn push_json_str(out: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => out.push_str("\"\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_render_is_json() {
        let line = Logger::render(Event::ReadConcernLevelRejected, &[("level", "bogus")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "READ_CONCERN_LEVEL_REJECTED");
        assert_eq!(parsed["severity"], "WARN");
        assert_eq!(parsed["level"], "bogus");
    }

    #[test]
    fn test_render_deterministic_ordering() {
        let a = Logger::render(Event::ReadConcernAppendFailed, &[("zebra", "1"), ("apple", "2")]);
        let b = Logger::render(Event::ReadConcernAppendFailed, &[("apple", "2"), ("zebra", "1")]);
        assert_eq!(a, b);
        assert!(a.find("apple").unwrap() < a.find("zebra").unwrap());
        assert!(a.find("\"event\"").unwrap() < a.find("\"severity\"").unwrap());
    }

    #[test]
    fn test_log_to_writer_writes_one_line() {
        let line = Logger::render(Event::ReadConcernLevelRejected, &[("level", "")]);
        let mut buffer = Vec::new();
        Logger::log_to_writer(&line, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), line);
    }

    #[test]
    fn test_capture_logs_collects_lines() {
        let ((), lines) = capture_logs(|| {
            Logger::log(Event::ReadConcernAppendFailed, &[("document", "{}")]);
            Logger::log(Event::ReadConcernPolicyRejected, &[("level", "x")]);
        });
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("{\"event\":\"READ_CONCERN_APPEND_FAILED\""));
        assert!(lines[1].contains("READ_CONCERN_POLICY_REJECTED"));

        // Capture ends with the closure
        assert!(!capture::record("{}"));
    }

    #[test]
    fn test_render_escapes_values() {
        let line = Logger::render(
            Event::ReadConcernAppendFailed,
            &[("document", "{\"level\":\"local\"}\n")],
        );
        assert_eq!(line.matches('\n').count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["document"], "{\"level\":\"local\"}\n");
    }
}
