//! Read Concern
//!
//! A read concern tells the server how consistent the data returned by a
//! read must be. This module provides:
//! - `ReadConcernLevel` - The recognized levels
//! - `ReadConcern` - The value object, backed by a native resource
//! - `ReadConcernConfig` / `LevelPolicy` - Validation and defaults
//! - `ReadConcernError` - The single failure type
//!
//! # Serialized shape
//!
//! A document with at most one field, `level`. Absence of the field means
//! "use the server default"; it is never encoded as null or "".

mod concern;
mod config;
mod errors;
mod level;

pub use concern::ReadConcern;
pub use config::{ConfigError, LevelPolicy, ReadConcernConfig};
pub use errors::{ReadConcernError, ReadConcernErrorCode, ReadConcernResult};
pub use level::ReadConcernLevel;

/// Field the level is stored under in every document representation.
pub const LEVEL_FIELD: &str = "level";
