//! In-memory store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Event, UpdateSet};

use super::{EventStore, StoreError};

/// Hash-map-backed [`EventStore`]. The lock gives per-key atomicity
/// for `patch`: the read-modify-write of the named fields happens
/// under a single write guard.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn put(&self, key: &str, record: Event) -> Result<(), StoreError> {
        self.records.write().await.insert(key.to_string(), record);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Event>, StoreError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn scan_all(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn patch(&self, key: &str, fields: &UpdateSet) -> Result<Option<Event>, StoreError> {
        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(record) => {
                for patch in fields.iter() {
                    patch.apply_to(record);
                }
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.records.write().await.remove(key);
        Ok(true)
    }
}
