//! Event Store Adapter: turns create/get/list/update/delete intents
//! into store primitives.

use std::sync::Arc;

use uuid::Uuid;

use crate::models::{Event, NewEvent, UpdateSet};

use super::{EventStore, StoreError};

#[derive(Clone)]
pub struct EventRepository {
    store: Arc<dyn EventStore>,
}

impl EventRepository {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Persist a validated event. A caller-supplied non-blank id is
    /// kept verbatim, otherwise a fresh v4 uuid is assigned. No
    /// uniqueness check: a duplicate id overwrites the old record,
    /// matching the store's upsert-by-key semantics.
    pub async fn create(&self, new_event: NewEvent) -> Result<Event, StoreError> {
        let event_id = match new_event.event_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        let record = Event {
            event_id,
            title: new_event.title,
            description: new_event.description,
            date: new_event.date,
            location: new_event.location,
            capacity: new_event.capacity,
            organizer: new_event.organizer,
            status: new_event.status,
        };
        self.store.put(&record.event_id, record.clone()).await?;
        Ok(record)
    }

    pub async fn get(&self, event_id: &str) -> Result<Option<Event>, StoreError> {
        self.store.get(event_id).await
    }

    pub async fn list(&self) -> Result<Vec<Event>, StoreError> {
        self.store.scan_all().await
    }

    /// Apply a field mask to a stored record. An empty mask never
    /// reaches the store's patch primitive; the current record is
    /// returned as-is. A failed patch comes back as `None` rather than
    /// an error; the handler has already pre-checked existence, so it
    /// can tell "never existed" from "patch failed".
    pub async fn update(
        &self,
        event_id: &str,
        fields: &UpdateSet,
    ) -> Result<Option<Event>, StoreError> {
        if fields.is_empty() {
            return self.store.get(event_id).await;
        }
        match self.store.patch(event_id, fields).await {
            Ok(updated) => Ok(updated),
            Err(err) => {
                tracing::error!(error = %err, event_id, "Patch failed");
                Ok(None)
            }
        }
    }

    pub async fn delete(&self, event_id: &str) -> Result<bool, StoreError> {
        self.store.delete(event_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::models::{EventStatus, FieldPatch};
    use crate::store::MemoryStore;

    fn new_event(event_id: Option<&str>) -> NewEvent {
        NewEvent {
            event_id: event_id.map(str::to_string),
            title: "Launch".to_string(),
            description: "Kickoff".to_string(),
            date: "2025-03-01".to_string(),
            location: "HQ".to_string(),
            capacity: 50,
            organizer: "Ops".to_string(),
            status: EventStatus::Active,
        }
    }

    /// Delegates to a `MemoryStore` while counting patch calls.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        patches: AtomicUsize,
    }

    #[async_trait]
    impl EventStore for CountingStore {
        async fn put(&self, key: &str, record: Event) -> Result<(), StoreError> {
            self.inner.put(key, record).await
        }

        async fn get(&self, key: &str) -> Result<Option<Event>, StoreError> {
            self.inner.get(key).await
        }

        async fn scan_all(&self) -> Result<Vec<Event>, StoreError> {
            self.inner.scan_all().await
        }

        async fn patch(
            &self,
            key: &str,
            fields: &UpdateSet,
        ) -> Result<Option<Event>, StoreError> {
            self.patches.fetch_add(1, Ordering::SeqCst);
            self.inner.patch(key, fields).await
        }

        async fn delete(&self, key: &str) -> Result<bool, StoreError> {
            self.inner.delete(key).await
        }
    }

    /// Fails every patch, to exercise the absent-marker path.
    struct BrokenPatchStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl EventStore for BrokenPatchStore {
        async fn put(&self, key: &str, record: Event) -> Result<(), StoreError> {
            self.inner.put(key, record).await
        }

        async fn get(&self, key: &str) -> Result<Option<Event>, StoreError> {
            self.inner.get(key).await
        }

        async fn scan_all(&self) -> Result<Vec<Event>, StoreError> {
            self.inner.scan_all().await
        }

        async fn patch(&self, _key: &str, _fields: &UpdateSet) -> Result<Option<Event>, StoreError> {
            Err(StoreError::Unavailable("connection reset".to_string()))
        }

        async fn delete(&self, key: &str) -> Result<bool, StoreError> {
            self.inner.delete(key).await
        }
    }

    #[tokio::test]
    async fn create_echoes_supplied_id() {
        let repo = EventRepository::new(Arc::new(MemoryStore::new()));
        let record = repo.create(new_event(Some("custom-id"))).await.unwrap();
        assert_eq!(record.event_id, "custom-id");
        assert_eq!(repo.get("custom-id").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn create_generates_distinct_ids_when_omitted() {
        let repo = EventRepository::new(Arc::new(MemoryStore::new()));
        let first = repo.create(new_event(None)).await.unwrap();
        let second = repo.create(new_event(None)).await.unwrap();
        assert!(!first.event_id.is_empty());
        assert_ne!(first.event_id, second.event_id);
    }

    #[tokio::test]
    async fn create_treats_blank_id_as_absent() {
        let repo = EventRepository::new(Arc::new(MemoryStore::new()));
        let record = repo.create(new_event(Some("  "))).await.unwrap();
        assert_ne!(record.event_id.trim(), "");
        assert_ne!(record.event_id, "  ");
    }

    #[tokio::test]
    async fn create_with_duplicate_id_overwrites() {
        let repo = EventRepository::new(Arc::new(MemoryStore::new()));
        repo.create(new_event(Some("dup"))).await.unwrap();
        let mut replacement = new_event(Some("dup"));
        replacement.title = "Relaunch".to_string();
        repo.create(replacement).await.unwrap();
        let stored = repo.get("dup").await.unwrap().unwrap();
        assert_eq!(stored.title, "Relaunch");
    }

    #[tokio::test]
    async fn empty_update_set_skips_the_patch_primitive() {
        let store = Arc::new(CountingStore::default());
        let repo = EventRepository::new(store.clone());
        let record = repo.create(new_event(Some("e1"))).await.unwrap();

        let result = repo.update("e1", &UpdateSet::default()).await.unwrap();
        assert_eq!(result, Some(record));
        assert_eq!(store.patches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_applies_only_named_fields() {
        let repo = EventRepository::new(Arc::new(MemoryStore::new()));
        let before = repo.create(new_event(Some("e1"))).await.unwrap();

        let mut fields = UpdateSet::default();
        fields.push(FieldPatch::Capacity(75));
        let after = repo.update("e1", &fields).await.unwrap().unwrap();

        assert_eq!(after.capacity, 75);
        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
        assert_eq!(after.date, before.date);
        assert_eq!(after.location, before.location);
        assert_eq!(after.organizer, before.organizer);
        assert_eq!(after.status, before.status);
    }

    #[tokio::test]
    async fn failed_patch_surfaces_as_absent() {
        let store = Arc::new(BrokenPatchStore {
            inner: MemoryStore::new(),
        });
        let repo = EventRepository::new(store);
        repo.create(new_event(Some("e1"))).await.unwrap();

        let mut fields = UpdateSet::default();
        fields.push(FieldPatch::Capacity(75));
        assert_eq!(repo.update("e1", &fields).await.unwrap(), None);
    }
}
