//! In-memory event store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::calendar::{grid_range, EventItem};

use super::{EventStore, Permissions, Result, StoreError};

/// In-memory store backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryEventStore {
    items: Arc<RwLock<HashMap<Uuid, EventItem>>>,
    permissions: Permissions,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore {
    /// Creates a new empty store granting every permission.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            permissions: Permissions::all(),
        }
    }

    /// Sets the permissions reported by [`EventStore::get_permissions`].
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Creates a store pre-populated with the given events.
    pub async fn seeded(seed: Vec<EventItem>) -> Self {
        let store = Self::new();
        {
            let mut items = store.items.write().await;
            for item in seed {
                items.insert(item.id, item);
            }
        }
        store
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn get_items(&self, date: NaiveDateTime) -> Result<Vec<EventItem>> {
        let (grid_begin, grid_end) = grid_range(date)?;
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.begin_date < grid_end && item.end_date >= grid_begin)
            .cloned()
            .collect())
    }

    async fn create_item(&self, item: &EventItem) -> Result<()> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(StoreError::AlreadyExists(item.id));
        }
        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn delete_item(&self, id: Uuid) -> Result<()> {
        let mut items = self.items.write().await;
        if items.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn get_permissions(&self) -> Result<Permissions> {
        Ok(self.permissions)
    }
}
