//! ReadConcern - Client-side read concern value
//!
//! A `ReadConcern` exclusively owns one native resource. The level is
//! always read back from that resource, never cached, so values copied
//! from a driver-owned handle report correctly.
//!
//! Ownership rules:
//! - Duplicating a read concern deep-copies the resource
//! - Constructing from a foreign handle deep-copies it; the caller keeps
//!   ownership of (and responsibility for) the original
//! - `release` drops the resource exactly once; later calls are no-ops
//! - A failed construction drops its partially configured resource before
//!   the error is returned

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::config::LevelPolicy;
use super::errors::{ReadConcernError, ReadConcernResult};
use super::level::ReadConcernLevel;
use super::LEVEL_FIELD;
use crate::document::Document;
use crate::native::{DriverReadConcern, NativeReadConcern};
use crate::observability::{Event, Logger};

/// A read concern backed by a native resource.
///
/// Immutable after construction: no operation changes the level.
pub struct ReadConcern<R: NativeReadConcern = DriverReadConcern> {
    /// `None` only after `release`.
    raw: Option<R>,
}

impl<R: NativeReadConcern> ReadConcern<R> {
    /// Create a read concern with no level set.
    pub fn new() -> Self {
        Self {
            raw: Some(R::allocate()),
        }
    }

    /// Create a read concern from a recognized level.
    ///
    /// `NativeReadConcern` implementations must accept every canonical
    /// level. A rejection is logged and panics in debug builds; release
    /// builds fall back to an empty read concern.
    pub fn from_level(level: ReadConcernLevel) -> Self {
        Self::with_level(level.as_str()).unwrap_or_else(|err| {
            if cfg!(debug_assertions) {
                panic!("native resource rejected canonical level: {}", err);
            }
            Self::new()
        })
    }

    /// Create a read concern from a level string.
    ///
    /// Any string the native resource accepts is allowed, including levels
    /// this client does not recognize.
    pub fn with_level(level: &str) -> ReadConcernResult<Self> {
        Self::with_policy(level, LevelPolicy::Permissive)
    }

    /// Create a read concern from a level string validated by `policy`.
    pub fn with_policy(level: &str, policy: LevelPolicy) -> ReadConcernResult<Self> {
        if let Err(err) = policy.check(level) {
            Logger::log(Event::ReadConcernPolicyRejected, &[("level", level)]);
            return Err(err);
        }

        let mut read_concern = Self::new();
        let accepted = read_concern
            .raw
            .as_mut()
            .is_some_and(|raw| raw.set_level(level));
        if !accepted {
            // `read_concern` is dropped here, releasing its resource
            Logger::log(Event::ReadConcernLevelRejected, &[("level", level)]);
            return Err(ReadConcernError::invalid_level(level));
        }
        Ok(read_concern)
    }

    /// Decode a read concern from a document.
    ///
    /// A string-typed `level` field sets the level. A missing field, or one
    /// of any other type, yields an empty read concern.
    pub fn from_document(doc: &Document) -> ReadConcernResult<Self> {
        Self::from_document_with_policy(doc, LevelPolicy::Permissive)
    }

    /// Decode a read concern from a document, validating the level with `policy`.
    pub fn from_document_with_policy(
        doc: &Document,
        policy: LevelPolicy,
    ) -> ReadConcernResult<Self> {
        match doc.get_str(LEVEL_FIELD) {
            Some(level) => Self::with_policy(level, policy),
            None => Ok(Self::new()),
        }
    }

    /// Copy a foreign resource handle.
    ///
    /// The handle is deep-copied, never aliased. The caller still owns the
    /// original. An absent handle yields an empty read concern.
    pub fn from_raw(raw: Option<&R>) -> Self {
        Self {
            raw: Some(raw.map_or_else(R::allocate, R::deep_copy)),
        }
    }

    /// The configured level, or `None` if no level is set.
    pub fn level(&self) -> Option<&str> {
        self.raw.as_ref().and_then(|raw| raw.level())
    }

    /// The configured level if it is a recognized one.
    pub fn known_level(&self) -> Option<ReadConcernLevel> {
        self.level().and_then(|level| level.parse().ok())
    }

    /// True if no level is set, deferring to the server default.
    pub fn is_default(&self) -> bool {
        self.level().is_none()
    }

    /// Borrow the backing resource. `None` after `release`.
    pub fn as_raw(&self) -> Option<&R> {
        self.raw.as_ref()
    }

    /// Merge this read concern into an outgoing command.
    ///
    /// Existing fields of `command` are kept. A released read concern
    /// contributes nothing.
    pub fn append(&self, command: &mut Document) -> ReadConcernResult<()> {
        let Some(raw) = self.raw.as_ref() else {
            return Ok(());
        };
        if raw.append_to(command) {
            return Ok(());
        }

        let rendered = command.to_json();
        Logger::log(Event::ReadConcernAppendFailed, &[("document", rendered.as_str())]);
        Err(ReadConcernError::append_failed(rendered))
    }

    /// Encode as a standalone document.
    ///
    /// Holds a single `level` field, omitted entirely when no level is set.
    pub fn encode(&self) -> Document {
        let mut doc = Document::new();
        if let Some(level) = self.level() {
            doc.insert(LEVEL_FIELD, level);
        }
        doc
    }

    /// Release the backing resource.
    ///
    /// Idempotent. Also runs on drop.
    pub fn release(&mut self) {
        drop(self.raw.take());
    }

    /// True once `release` has run.
    pub fn is_released(&self) -> bool {
        self.raw.is_none()
    }
}

impl<R: NativeReadConcern> Default for ReadConcern<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NativeReadConcern> From<ReadConcernLevel> for ReadConcern<R> {
    fn from(level: ReadConcernLevel) -> Self {
        Self::from_level(level)
    }
}

/// Deep-copies the resource. A released read concern clones as released.
impl<R: NativeReadConcern> Clone for ReadConcern<R> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.as_ref().map(R::deep_copy),
        }
    }
}

impl<R: NativeReadConcern> PartialEq for ReadConcern<R> {
    fn eq(&self, other: &Self) -> bool {
        self.level() == other.level()
    }
}

impl<R: NativeReadConcern> Eq for ReadConcern<R> {}

impl<R: NativeReadConcern> Drop for ReadConcern<R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R: NativeReadConcern> fmt::Debug for ReadConcern<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadConcern")
            .field("level", &self.level())
            .finish()
    }
}

impl<R: NativeReadConcern> fmt::Display for ReadConcern<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl<R: NativeReadConcern> Serialize for ReadConcern<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let level = self.level();
        let mut state = serializer.serialize_struct("ReadConcern", usize::from(level.is_some()))?;
        match level {
            Some(level) => state.serialize_field(LEVEL_FIELD, level)?,
            None => state.skip_field(LEVEL_FIELD)?,
        }
        state.end()
    }
}

impl<'de, R: NativeReadConcern> Deserialize<'de> for ReadConcern<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Document::deserialize(deserializer)?;
        Self::from_document(&doc).map_err(de::Error::custom)
    }
}
