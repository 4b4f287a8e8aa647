//! Key-value store boundary.
//!
//! The store is external to the core: per-key atomic writes, no
//! cross-key transactions, no secondary indexes. Handlers never talk
//! to it directly; they go through [`EventRepository`].

pub mod memory;
pub mod repository;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Event, UpdateSet};

pub use memory::MemoryStore;
pub use repository::EventRepository;

/// A store call failed for infrastructure reasons. Absent keys are
/// never an error; they come back as `None`/`false`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Primitive operations the backing store must provide.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Full-record write, keyed by `key`. Upserts: an existing record
    /// under the same key is overwritten.
    async fn put(&self, key: &str, record: Event) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<Event>, StoreError>;

    /// Every stored record, in store-native order.
    async fn scan_all(&self) -> Result<Vec<Event>, StoreError>;

    /// Set exactly the fields named in `fields`, leaving all others
    /// untouched, and return the updated record. `None` if the key is
    /// absent.
    async fn patch(&self, key: &str, fields: &UpdateSet) -> Result<Option<Event>, StoreError>;

    /// Remove the record under `key`. Removing an absent key reports
    /// success; callers wanting a not-found outcome must check first.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;
}
