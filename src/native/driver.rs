//! Driver-backed read concern resource
//!
//! Levels are held as C strings, matching how the driver hands them to the
//! wire layer. A level that cannot be represented (empty, or containing an
//! interior NUL) is rejected at `set_level`.

use std::ffi::CString;

use super::NativeReadConcern;
use crate::document::Document;
use crate::read_concern::LEVEL_FIELD;

/// Read concern resource owned by the driver.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DriverReadConcern {
    level: Option<CString>,
    frozen: bool,
}

impl DriverReadConcern {
    /// Freeze the resource. Later `set_level` calls are rejected.
    ///
    /// The driver freezes read concerns it hands out from shared owners
    /// such as a client or database.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// True once `freeze` has been called.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl NativeReadConcern for DriverReadConcern {
    fn allocate() -> Self {
        Self::default()
    }

    fn set_level(&mut self, level: &str) -> bool {
        if self.frozen || level.is_empty() {
            return false;
        }
        match CString::new(level) {
            Ok(level) => {
                self.level = Some(level);
                true
            }
            Err(_) => false,
        }
    }

    fn level(&self) -> Option<&str> {
        self.level.as_deref().and_then(|level| level.to_str().ok())
    }

    fn append_to(&self, command: &mut Document) -> bool {
        let Some(level) = self.level() else {
            return true;
        };
        if command.contains_key(LEVEL_FIELD) {
            return false;
        }
        command.insert(LEVEL_FIELD, level);
        true
    }

    fn deep_copy(&self) -> Self {
        Self {
            level: self.level.clone(),
            frozen: false,
        }
    }
}
