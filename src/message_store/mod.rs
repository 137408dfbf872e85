//! Time-ordered message storage
//!
//! Messages are kept in a score-ordered collection where the score is the
//! publish time in whole seconds. A collection is split into numbered
//! partitions so that test data never mixes with production data.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use message_timeline::message_store::{MemoryBackend, MessageStore, Partition};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(MemoryBackend::new());
//!     let store = MessageStore::new(backend, Partition::TEST);
//!
//!     store.publish("hello").await?;
//!     let last = store.get_most_recent().await?;
//!     assert_eq!(last.map(|m| m.content).as_deref(), Some("hello"));
//!     Ok(())
//! }
//! ```
//!
//! # Ordering
//!
//! Records with the same second are returned in insertion order by both
//! bundled backends.

pub mod backend;
pub mod connection;
pub mod error;
pub mod store;
pub mod time_range;
pub mod types;

// Re-export main types for convenience
pub use backend::{MemoryBackend, PostgresBackend, SortedSetBackend};
pub use connection::StoreConfig;
pub use error::{Result, StoreError};
pub use store::MessageStore;
pub use time_range::{RangeParsePolicy, TimeWindow, TIME_FORMAT};
pub use types::{Message, Partition, StoredRecord};
