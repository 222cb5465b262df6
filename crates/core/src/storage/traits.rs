use async_trait::async_trait;

use super::{Item, PrimaryKey, Result};

/// A partition/sort-key keyed item store.
///
/// Implementations must be safe for concurrent use; the proxy shares one
/// handle between all callers.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Point lookup by the full primary key.
    async fn get_item(&self, key: &PrimaryKey) -> Result<Option<Item>>;

    /// Writes `item`, replacing any item stored under `key`.
    ///
    /// `item` carries the key attributes named by `key`.
    async fn put_item(&self, key: &PrimaryKey, item: Item) -> Result<()>;

    /// Deletes the item stored under `key`. Deleting a missing item is not an error.
    async fn delete_item(&self, key: &PrimaryKey) -> Result<()>;

    /// Returns every item whose partition attribute `partition_name` equals `partition_value`.
    async fn query_partition(&self, partition_name: &str, partition_value: &str)
        -> Result<Vec<Item>>;
}

#[async_trait]
impl<T: ItemStore + ?Sized> ItemStore for std::sync::Arc<T> {
    async fn get_item(&self, key: &PrimaryKey) -> Result<Option<Item>> {
        (**self).get_item(key).await
    }

    async fn put_item(&self, key: &PrimaryKey, item: Item) -> Result<()> {
        (**self).put_item(key, item).await
    }

    async fn delete_item(&self, key: &PrimaryKey) -> Result<()> {
        (**self).delete_item(key).await
    }

    async fn query_partition(
        &self,
        partition_name: &str,
        partition_value: &str,
    ) -> Result<Vec<Item>> {
        (**self)
            .query_partition(partition_name, partition_value)
            .await
    }
}
