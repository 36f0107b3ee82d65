//! Read concern configuration
//!
//! Controls how level strings are validated and which read concern is used
//! when a caller does not specify one. Loaded once, immutable afterwards.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::concern::ReadConcern;
use super::errors::{ReadConcernError, ReadConcernResult};
use super::level::ReadConcernLevel;

/// How level strings are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelPolicy {
    /// Accept any string the native resource accepts.
    ///
    /// Servers may add levels an older client does not know about.
    #[default]
    Permissive,
    /// Accept only recognized level names.
    Strict,
}

impl LevelPolicy {
    /// Check `level` against this policy.
    pub fn check(&self, level: &str) -> ReadConcernResult<()> {
        match self {
            LevelPolicy::Permissive => Ok(()),
            LevelPolicy::Strict => level.parse::<ReadConcernLevel>().map(|_| ()),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ReadConcernError),
}

/// Read concern configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadConcernConfig {
    /// Validation applied to level strings.
    pub policy: LevelPolicy,
    /// Level used when none is given. `None` leaves the server default.
    pub default_level: Option<String>,
}

impl ReadConcernConfig {
    /// Strict validation, no default level.
    pub fn strict() -> Self {
        Self {
            policy: LevelPolicy::Strict,
            default_level: None,
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate the configuration.
    ///
    /// A configured default level must be accepted by the policy and by
    /// the native resource.
    pub fn validate(&self) -> ReadConcernResult<()> {
        match self.default_level {
            Some(_) => self.read_concern().map(|_| ()),
            None => Ok(()),
        }
    }

    /// Build the configured default read concern.
    pub fn read_concern(&self) -> ReadConcernResult<ReadConcern> {
        match &self.default_level {
            Some(level) => ReadConcern::with_policy(level, self.policy),
            None => Ok(ReadConcern::new()),
        }
    }
}
