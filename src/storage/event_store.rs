//! `EventStore` trait and implementations.
//!
//! The event log is append-only and unordered at insertion: no update, no
//! delete, no eviction, no uniqueness check. Ordering happens on the read
//! side.

use crate::core::events::EventRecord;
use std::sync::{Arc, RwLock};

/// Trait for event storage backends.
pub trait EventStore: Send + Sync {
    /// Appends a record to the end of the log.
    fn append(&self, record: EventRecord);

    /// Returns a copy of all current records for read-side processing.
    fn snapshot(&self) -> Vec<EventRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory event store. The lock guards against concurrent request
/// handlers mutating the log at the same time.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    records: RwLock<Vec<EventRecord>>,
}

impl InMemoryEventStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl EventStore for InMemoryEventStore {
    fn append(&self, record: EventRecord) {
        self.records.write().expect("lock poisoned").push(record);
    }

    fn snapshot(&self) -> Vec<EventRecord> {
        self.records.read().expect("lock poisoned").clone()
    }

    fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }
}

/// Thread-safe handle to any event store.
pub type SharedEventStore = Arc<dyn EventStore>;
