use std::sync::Arc;

use chrono::Utc;

use crate::message_store::{
    backend::SortedSetBackend,
    error::{Result, StoreError},
    time_range::{RangeParsePolicy, TimeWindow},
    types::{Message, Partition, StoredRecord},
};

/// Handle onto one partition of a backend
///
/// Cheap to build; the API layer builds one per request.
#[derive(Clone)]
pub struct MessageStore {
    backend: Arc<dyn SortedSetBackend>,
    partition: Partition,
    range_policy: RangeParsePolicy,
}

impl MessageStore {
    pub fn new(backend: Arc<dyn SortedSetBackend>, partition: Partition) -> Self {
        Self {
            backend,
            partition,
            range_policy: RangeParsePolicy::default(),
        }
    }

    /// Set how unparsable window bounds are handled (builder pattern)
    pub fn with_range_policy(mut self, range_policy: RangeParsePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Store a message under the current time
    pub async fn publish(&self, content: &str) -> Result<()> {
        self.publish_at(content, Utc::now().timestamp()).await
    }

    /// Store a message under an explicit score (seconds since the Unix epoch)
    pub async fn publish_at(&self, content: &str, timestamp: i64) -> Result<()> {
        self.backend
            .add(self.partition, StoredRecord::new(timestamp, content))
            .await
    }

    /// The latest message, or None if the partition is empty
    pub async fn get_most_recent(&self) -> Result<Option<Message>> {
        let record = self.backend.highest(self.partition).await?;
        Ok(record.map(StoredRecord::into_message))
    }

    /// Messages whose timestamp lies in `[start, end]`, oldest first
    ///
    /// Both bounds use `YYYY-MM-DDTHH:MM:SS` in local time. When a bound does
    /// not parse, `RangeParsePolicy::Lenient` returns an empty list and
    /// `RangeParsePolicy::Strict` returns `StoreError::MalformedTimeRange`.
    pub async fn get_by_time_range(&self, start: &str, end: &str) -> Result<Vec<Message>> {
        let window = match TimeWindow::parse(start, end) {
            Ok(window) => window,
            Err(err @ StoreError::MalformedTimeRange { .. }) => {
                return match self.range_policy {
                    RangeParsePolicy::Lenient => Ok(Vec::new()),
                    RangeParsePolicy::Strict => Err(err),
                };
            }
            Err(err) => return Err(err),
        };

        self.get_by_window(window).await
    }

    /// Messages whose timestamp lies in an already-parsed window, oldest first
    pub async fn get_by_window(&self, window: TimeWindow) -> Result<Vec<Message>> {
        let records = self.backend.range_by_score(self.partition, window).await?;
        Ok(records.into_iter().map(StoredRecord::into_message).collect())
    }

    /// Remove every message in this partition. Not reachable over HTTP.
    pub async fn flush(&self) -> Result<()> {
        self.backend.flush(self.partition).await
    }

    pub async fn count(&self) -> Result<u64> {
        self.backend.count(self.partition).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message_store::backend::MemoryBackend;
    use crate::message_store::time_range::format_timestamp;

    fn test_store() -> (Arc<MemoryBackend>, MessageStore) {
        let backend = Arc::new(MemoryBackend::new());
        let store = MessageStore::new(backend.clone(), Partition::TEST);
        (backend, store)
    }

    fn contents(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.content.as_str()).collect()
    }

    fn bound(ts: i64) -> String {
        format_timestamp(ts).unwrap()
    }

    #[tokio::test]
    async fn test_most_recent_is_last_published() {
        let (_, store) = test_store();
        store.publish("message2").await.unwrap();
        store.publish("message3").await.unwrap();

        let last = store.get_most_recent().await.unwrap();
        assert_eq!(last, Some(Message::new("message3")));
    }

    #[tokio::test]
    async fn test_most_recent_survives_content_collisions() {
        let (_, store) = test_store();
        store.publish("a").await.unwrap();
        store.publish("b").await.unwrap();
        store.publish("a").await.unwrap();

        assert_eq!(store.get_most_recent().await.unwrap(), Some(Message::new("a")));
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_empty_partition_has_no_most_recent() {
        let (_, store) = test_store();
        assert_eq!(store.get_most_recent().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_content_is_not_absence() {
        let (_, store) = test_store();
        store.publish("").await.unwrap();

        assert_eq!(store.get_most_recent().await.unwrap(), Some(Message::new("")));
    }

    #[tokio::test]
    async fn test_identical_content_is_stored_twice() {
        let (_, store) = test_store();
        store.publish_at("this is a message.", 1_000).await.unwrap();
        store.publish_at("this is a message.", 1_000).await.unwrap();

        let messages = store.get_by_window(TimeWindow::new(1_000, 1_000)).await.unwrap();
        assert_eq!(contents(&messages), vec!["this is a message.", "this is a message."]);
    }

    #[tokio::test]
    async fn test_range_includes_window_and_excludes_outside() {
        let (_, store) = test_store();
        let t = 1_700_000_000;
        store.publish_at("before", t - 3_601).await.unwrap();
        store.publish_at("at-start", t).await.unwrap();
        store.publish_at("inside", t + 1_800).await.unwrap();
        store.publish_at("at-end", t + 3_600).await.unwrap();
        store.publish_at("after", t + 3_601).await.unwrap();

        let messages = store
            .get_by_time_range(&bound(t), &bound(t + 3_600))
            .await
            .unwrap();
        assert_eq!(contents(&messages), vec!["at-start", "inside", "at-end"]);

        let exact = store.get_by_time_range(&bound(t), &bound(t)).await.unwrap();
        assert_eq!(contents(&exact), vec!["at-start"]);
    }

    #[tokio::test]
    async fn test_range_is_ascending_regardless_of_publish_order() {
        let (_, store) = test_store();
        store.publish_at("third", 300).await.unwrap();
        store.publish_at("first", 100).await.unwrap();
        store.publish_at("second", 200).await.unwrap();

        let messages = store.get_by_window(TimeWindow::new(0, 1_000)).await.unwrap();
        assert_eq!(contents(&messages), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_future_window_is_empty() {
        let (_, store) = test_store();
        store.publish("message6").await.unwrap();
        store.publish("message7").await.unwrap();

        let now = Utc::now().timestamp();
        let messages = store
            .get_by_time_range(&bound(now + 3_600), &bound(now + 7_200))
            .await
            .unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_flush_empties_partition() {
        let (_, store) = test_store();
        store.publish("message1").await.unwrap();
        store.flush().await.unwrap();

        assert_eq!(store.get_most_recent().await.unwrap(), None);
        let messages = store.get_by_window(TimeWindow::new(i64::MIN, i64::MAX)).await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_lenient_policy_turns_bad_bounds_into_empty_result() {
        let (_, store) = test_store();
        store.publish("message1").await.unwrap();

        let messages = store
            .get_by_time_range("yesterday", "2099-01-01T00:00:00")
            .await
            .unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_bad_bounds() {
        let (backend, _) = test_store();
        let store = MessageStore::new(backend, Partition::TEST)
            .with_range_policy(RangeParsePolicy::Strict);

        let err = store
            .get_by_time_range("2024-01-01T00:00:00", "tomorrow")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedTimeRange { .. }));
    }

    #[tokio::test]
    async fn test_handles_on_different_partitions_do_not_share_messages() {
        let (backend, test_store) = test_store();
        let primary = MessageStore::new(backend, Partition::PRIMARY);

        primary.publish("prod").await.unwrap();
        test_store.publish("test").await.unwrap();
        test_store.flush().await.unwrap();

        assert_eq!(primary.get_most_recent().await.unwrap(), Some(Message::new("prod")));
        assert_eq!(test_store.get_most_recent().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unavailable_backend_propagates() {
        let (backend, store) = test_store();
        backend.set_offline(true);

        assert!(store.publish("x").await.unwrap_err().is_unavailable());
        assert!(store.get_most_recent().await.unwrap_err().is_unavailable());
        assert!(store
            .get_by_time_range("2024-01-01T00:00:00", "2024-01-02T00:00:00")
            .await
            .unwrap_err()
            .is_unavailable());
    }
}
