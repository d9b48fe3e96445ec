//! Shared identifier and trait plumbing for ledger records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Millisecond-precision creation timestamp used as a record identifier.
///
/// Ids are unique within a record list and non-decreasing in creation order.
/// Batch imports derive ids from one base timestamp offset by row index so
/// records created inside a single import stay distinct.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Derives an id from a creation instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant.timestamp_millis())
    }

    /// Shifts the id by `n` milliseconds.
    pub fn offset(self, n: i64) -> Self {
        Self(self.0 + n)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}
