use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::SortedSetBackend;
use crate::message_store::{
    error::{Result, StoreError},
    time_range::TimeWindow,
    types::{Partition, StoredRecord},
};

/// (score, insertion sequence)
type RecordKey = (i64, u64);

#[derive(Default)]
struct Inner {
    partitions: HashMap<Partition, BTreeMap<RecordKey, StoredRecord>>,
    next_seq: u64,
}

/// In-process backend for tests and local runs
///
/// Can be switched offline to simulate an unreachable store.
#[derive(Default)]
pub struct MemoryBackend {
    inner: Mutex<Inner>,
    offline: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every call fails with `StoreError::Unavailable`
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory backend is offline".to_string(),
            ));
        }

        self.inner
            .lock()
            .map_err(|_| StoreError::Database("memory backend lock poisoned".to_string()))
    }
}

#[async_trait]
impl SortedSetBackend for MemoryBackend {
    async fn add(&self, partition: Partition, record: StoredRecord) -> Result<()> {
        let mut inner = self.lock()?;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner
            .partitions
            .entry(partition)
            .or_default()
            .insert((record.score, seq), record);
        Ok(())
    }

    async fn highest(&self, partition: Partition) -> Result<Option<StoredRecord>> {
        let inner = self.lock()?;
        Ok(inner
            .partitions
            .get(&partition)
            .and_then(|records| records.values().next_back().cloned()))
    }

    async fn range_by_score(&self, partition: Partition, window: TimeWindow) -> Result<Vec<StoredRecord>> {
        let inner = self.lock()?;
        if window.is_empty() {
            return Ok(Vec::new());
        }

        Ok(inner
            .partitions
            .get(&partition)
            .map(|records| {
                records
                    .range((window.start, 0)..=(window.end, u64::MAX))
                    .map(|(_, record)| record.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn flush(&self, partition: Partition) -> Result<()> {
        let mut inner = self.lock()?;
        inner.partitions.remove(&partition);
        Ok(())
    }

    async fn count(&self, partition: Partition) -> Result<u64> {
        let inner = self.lock()?;
        Ok(inner
            .partitions
            .get(&partition)
            .map_or(0, |records| records.len() as u64))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
