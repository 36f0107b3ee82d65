//! ReadConcernLevel - Named read guarantees
//!
//! The typed level set is closed. Levels arriving as strings (from a
//! document or a newer server) are not limited to it; see `ReadConcern`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{ReadConcernError, ReadConcernResult};

/// Recognized read concern levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadConcernLevel {
    /// Most recent data on the queried node, no durability guarantee
    Local,
    /// Like `Local`, but may return orphaned data on sharded clusters
    Available,
    /// Data acknowledged by a majority of replica set members
    Majority,
    /// Majority-acknowledged data reflecting all prior successful writes
    Linearizable,
    /// Majority-committed data from a single point in time
    Snapshot,
}

impl ReadConcernLevel {
    /// All recognized levels.
    pub const ALL: [ReadConcernLevel; 5] = [
        ReadConcernLevel::Local,
        ReadConcernLevel::Available,
        ReadConcernLevel::Majority,
        ReadConcernLevel::Linearizable,
        ReadConcernLevel::Snapshot,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadConcernLevel::Local => "local",
            ReadConcernLevel::Available => "available",
            ReadConcernLevel::Majority => "majority",
            ReadConcernLevel::Linearizable => "linearizable",
            ReadConcernLevel::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for ReadConcernLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadConcernLevel {
    type Err = ReadConcernError;

    /// Parse a canonical name. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> ReadConcernResult<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ReadConcernError::unknown_level(s))
    }
}
