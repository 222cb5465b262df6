use crate::entity::{keys, EntityDescriptor};
use crate::error::{ProxyError, Result};
use crate::storage::{Attributes, Item, ItemStore, PrimaryKey};

/// Raw store response of [`query`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResponse {
    /// Point lookup hit.
    Item(Item),
    /// Point lookup miss for the given key.
    Miss(PrimaryKey),
    /// The identity attribute is present but cannot form a key (`null`, a
    /// list or a map), so no item can match.
    Unkeyed,
    /// Partition scan of the whole entity kind.
    Items(Vec<Item>),
}

/// Looks up the item `data` identifies, or scans the entity kind.
///
/// The exact-match lookup always comes first; the partition scan is only
/// used when `data` does not carry the identity attribute at all. A present
/// identity that cannot form a key never falls back to the scan.
pub async fn query<S>(
    descriptor: &EntityDescriptor,
    data: &Attributes,
    store: &S,
) -> Result<QueryResponse>
where
    S: ItemStore + ?Sized,
{
    if !keys::has_identity_attribute(descriptor, data) {
        let names = descriptor.primary_key_names();
        let partition = keys::partition_value(descriptor.title());
        tracing::debug!(entity = %descriptor.title(), "Scanning all items of entity kind");
        let items = store
            .query_partition(&names.partition, &partition)
            .await
            .map_err(store_failure)?;
        return Ok(QueryResponse::Items(items));
    }

    match keys::make_identity(descriptor, data) {
        Ok(key) => {
            tracing::debug!(entity = %descriptor.title(), key = %key, "Trying exact match");
            match store.get_item(&key).await.map_err(store_failure)? {
                Some(item) => Ok(QueryResponse::Item(item)),
                None => {
                    tracing::debug!(key = %key, "Exact match not found");
                    Ok(QueryResponse::Miss(key))
                }
            }
        }
        Err(ProxyError::MissingIdentity { attribute, .. }) => {
            tracing::debug!(entity = %descriptor.title(), %attribute, "Identity cannot form a key");
            Ok(QueryResponse::Unkeyed)
        }
        Err(err) => Err(err),
    }
}

pub(crate) fn store_failure(err: crate::storage::StoreError) -> ProxyError {
    tracing::error!(error = %err, "Store call failed");
    ProxyError::Store(err)
}
