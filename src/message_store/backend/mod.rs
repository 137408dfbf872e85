//! Ordered key/value services the message store can sit on.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::message_store::{
    error::Result,
    time_range::TimeWindow,
    types::{Partition, StoredRecord},
};

pub use memory::MemoryBackend;
pub use postgres::PostgresBackend;

/// A score-ordered collection of records, addressed by partition.
///
/// Implementations order records by score and break ties by insertion order.
#[async_trait]
pub trait SortedSetBackend: Send + Sync {
    /// Add a record. Never replaces an existing record.
    async fn add(&self, partition: Partition, record: StoredRecord) -> Result<()>;

    /// The record with the highest score, latest insert first on ties
    async fn highest(&self, partition: Partition) -> Result<Option<StoredRecord>>;

    /// Every record with `window.start <= score <= window.end`, ascending
    async fn range_by_score(&self, partition: Partition, window: TimeWindow) -> Result<Vec<StoredRecord>>;

    /// Remove every record in the partition
    async fn flush(&self, partition: Partition) -> Result<()>;

    /// Number of records in the partition
    async fn count(&self, partition: Partition) -> Result<u64>;

    /// Short name used in log lines
    fn name(&self) -> &'static str;
}
