// Shared state handed to every request

use std::sync::Arc;

use crate::handlers::reply::DETAIL_STORE_UNAVAILABLE;
use crate::message_store::{MessageStore, Partition, RangeParsePolicy, SortedSetBackend};

/// Backend plus the per-request settings for building a `MessageStore`
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn SortedSetBackend>,
    partition: Partition,
    range_policy: RangeParsePolicy,
    unavailable_detail: Arc<str>,
}

impl AppState {
    pub fn new(backend: Arc<dyn SortedSetBackend>, partition: Partition) -> Self {
        Self {
            backend,
            partition,
            range_policy: RangeParsePolicy::default(),
            unavailable_detail: Arc::from(DETAIL_STORE_UNAVAILABLE),
        }
    }

    /// Set how unparsable window bounds are handled (builder pattern)
    pub fn with_range_policy(mut self, range_policy: RangeParsePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    /// Replace the `detail` text sent with a 500 when the store is unreachable (builder pattern)
    pub fn with_unavailable_detail(mut self, detail: impl Into<String>) -> Self {
        self.unavailable_detail = Arc::from(detail.into());
        self
    }

    pub fn unavailable_detail(&self) -> &str {
        &self.unavailable_detail
    }

    /// A store handle scoped to the configured partition
    pub fn store(&self) -> MessageStore {
        MessageStore::new(self.backend.clone(), self.partition).with_range_policy(self.range_policy)
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }
}
