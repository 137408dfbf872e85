use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Logical partition (database index) isolating one message collection from another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partition(pub i32);

impl Partition {
    /// Partition used by a production deployment unless configured otherwise
    pub const PRIMARY: Partition = Partition(0);

    /// Partition conventionally reserved for tests
    pub const TEST: Partition = Partition(1);

    pub fn index(self) -> i32 {
        self.0
    }
}

impl Default for Partition {
    fn default() -> Self {
        Partition::PRIMARY
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "db{}", self.0)
    }
}

/// A published message as seen by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A message as held by a backend
///
/// Records are keyed by `(score, id)`: two records with equal content and
/// equal score are still distinct because their ids differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// Seconds since the Unix epoch at publish time; the sort key
    pub score: i64,

    /// Unique per record
    pub id: Uuid,

    /// Content exactly as published
    pub content: String,
}

impl StoredRecord {
    /// Create a record with a fresh random id
    pub fn new(score: i64, content: impl Into<String>) -> Self {
        Self {
            score,
            id: Uuid::new_v4(),
            content: content.into(),
        }
    }

    pub fn into_message(self) -> Message {
        Message {
            content: self.content,
        }
    }
}
