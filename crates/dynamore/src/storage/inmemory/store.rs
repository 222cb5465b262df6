//! In-memory item store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dynamore_core::storage::Result;
use dynamore_core::{Item, ItemStore, PrimaryKey, StoreError};

/// In-memory storage backend for testing.
///
/// Keeps items ordered by primary key, so a partition query returns items in
/// ascending sort-key order like DynamoDB does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<BTreeMap<PrimaryKey, Item>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items across all entity kinds.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn get_item(&self, key: &PrimaryKey) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn put_item(&self, key: &PrimaryKey, item: Item) -> Result<()> {
        if PrimaryKey::from_item(&key.names, &item).as_ref() != Some(key) {
            return Err(StoreError::InvalidItem(format!(
                "item does not carry its key attributes ({key})"
            )));
        }
        let mut items = self.items.write().await;
        items.insert(key.clone(), item);
        Ok(())
    }

    async fn delete_item(&self, key: &PrimaryKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }

    async fn query_partition(
        &self,
        partition_name: &str,
        partition_value: &str,
    ) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|(key, _)| {
                key.names.partition == partition_name && key.partition_value == partition_value
            })
            .map(|(_, item)| item.clone())
            .collect())
    }
}
