use std::sync::Arc;

use super::query::{query, store_failure, QueryResponse};
use super::ReadOutcome;
use crate::codec;
use crate::entity::{filter_keys, keys, Entity, EntityDescriptor};
use crate::error::{ProxyError, Result};
use crate::schema::{DraftValidator, SchemaValidator};
use crate::storage::{Attributes, Item, ItemStore, PrimaryKey, StoreError};
use crate::verb::Verb;

/// Behavior switches of a [`StoreProxy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyOptions {
    /// Invoke the post hook after REPLACE as well.
    ///
    /// Off by default: REPLACE historically runs no post hook while CREATE,
    /// PARTIAL_UPDATE and DELETE do. Whether that is intended belongs to the
    /// owner of the entity semantics, so turning it on is an explicit choice.
    pub post_hook_on_replace: bool,
}

/// Drives the CRUD verbs for any entity kind against one store handle.
///
/// Every verb is a fixed sequence of at most two store round trips (lookup,
/// then write or delete). The round trips are not guarded by a conditional
/// write: two concurrent creates of one identity can both succeed and the
/// last write wins. No verb retries.
pub struct StoreProxy<S> {
    store: S,
    validator: Arc<dyn SchemaValidator>,
    options: ProxyOptions,
}

impl<S: ItemStore> StoreProxy<S> {
    /// Creates a proxy over `store` using the default [`DraftValidator`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Arc::new(DraftValidator::default()),
            options: ProxyOptions::default(),
        }
    }

    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: SchemaValidator + 'static,
    {
        self.validator = Arc::new(validator);
        self
    }

    pub fn with_options(mut self, options: ProxyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// CREATE: validate, require a miss, write, run the post hook.
    pub async fn create(&self, descriptor: &EntityDescriptor, data: Attributes) -> Result<Attributes> {
        let entity = Entity::new(descriptor, data, self.validator.as_ref())?;
        let key = entity.identity()?;
        tracing::debug!(entity = %descriptor.title(), key = %key, "Creating item");

        if self.lookup(&key).await?.is_some() {
            tracing::debug!(key = %key, "Already exists");
            return Err(ProxyError::AlreadyExists {
                entity_type: descriptor.title().to_string(),
                id: keys::identity_label(descriptor, entity.attributes()),
            });
        }

        let item = entity.storable_item()?;
        self.check_pre(descriptor, Verb::Create, &item, None)?;
        let stored = self.write(descriptor, &key, &item).await?;
        self.run_post(descriptor, Verb::Create, &item, None);

        self.read_back(descriptor, &stored)
    }

    /// REPLACE: validate, require a hit, overwrite the whole item.
    ///
    /// The post hook only runs when [`ProxyOptions::post_hook_on_replace`] is set.
    pub async fn replace(&self, descriptor: &EntityDescriptor, data: Attributes) -> Result<Attributes> {
        let entity = Entity::new(descriptor, data, self.validator.as_ref())?;
        let key = entity.identity()?;
        tracing::debug!(entity = %descriptor.title(), key = %key, "Replacing item");

        let existing = self
            .lookup(&key)
            .await?
            .ok_or_else(|| not_found(descriptor, entity.attributes()))?;
        let existing = decode(&existing)?;

        let item = entity.storable_item()?;
        self.check_pre(descriptor, Verb::Replace, &item, Some(&existing))?;
        let stored = self.write(descriptor, &key, &item).await?;
        if self.options.post_hook_on_replace {
            self.run_post(descriptor, Verb::Replace, &item, Some(&existing));
        }

        self.read_back(descriptor, &stored)
    }

    /// PARTIAL_UPDATE: require a hit, shallow-merge `data` over the stored item.
    ///
    /// Top-level attributes in `data` overwrite the stored ones; all others are
    /// left untouched. Nested maps are replaced, not merged. `data` is not
    /// validated against the schema and may not change the key attributes.
    pub async fn partial_update(
        &self,
        descriptor: &EntityDescriptor,
        data: Attributes,
    ) -> Result<Attributes> {
        let key = keys::make_identity(descriptor, &data)?;
        tracing::debug!(entity = %descriptor.title(), key = %key, "Partially updating item");

        let mut item = self
            .lookup(&key)
            .await?
            .ok_or_else(|| not_found(descriptor, &data))?;
        let existing = decode(&item)?;
        self.check_pre(descriptor, Verb::PartialUpdate, &data, Some(&existing))?;

        let names = descriptor.primary_key_names();
        for (name, value) in &data {
            if names.is_key(name) {
                tracing::debug!(attribute = %name, "Ignoring key attribute in partial update");
                continue;
            }
            let value = codec::encode_value(value)
                .map_err(|e| ProxyError::unencodable(descriptor.title(), e))?;
            item.insert(name.clone(), value);
        }

        tracing::debug!(?item, "Writing merged item");
        self.store
            .put_item(&key, item.clone())
            .await
            .map_err(store_failure)?;

        let merged = decode(&item)?;
        self.run_post(descriptor, Verb::PartialUpdate, &data, Some(&merged));

        Ok(filter_keys(names, merged))
    }

    /// DELETE: require a hit, delete, return the item as it was.
    pub async fn delete(&self, descriptor: &EntityDescriptor, data: Attributes) -> Result<Attributes> {
        let key = keys::make_identity(descriptor, &data)?;
        tracing::debug!(entity = %descriptor.title(), key = %key, "Deleting item");

        let existing = self
            .lookup(&key)
            .await?
            .ok_or_else(|| not_found(descriptor, &data))?;
        let filtered = self.read_back(descriptor, &existing)?;

        self.check_pre(descriptor, Verb::Delete, &filtered, None)?;
        self.store.delete_item(&key).await.map_err(store_failure)?;
        self.run_post(descriptor, Verb::Delete, &filtered, None);

        Ok(filtered)
    }

    /// READ: the item `data` identifies, or every item of the kind.
    ///
    /// Every item of the kind is returned only when `data` lacks the identity
    /// attribute. A missing identified item is [`ReadOutcome::Absent`], not an
    /// error, and so is an identity value that cannot form a key.
    pub async fn read(&self, descriptor: &EntityDescriptor, data: &Attributes) -> Result<ReadOutcome> {
        match query(descriptor, data, &self.store).await? {
            QueryResponse::Item(item) => Ok(ReadOutcome::Item(self.read_back(descriptor, &item)?)),
            QueryResponse::Miss(_) | QueryResponse::Unkeyed => Ok(ReadOutcome::Absent),
            QueryResponse::Items(items) => {
                let items = items
                    .iter()
                    .map(|item| self.read_back(descriptor, item))
                    .collect::<Result<Vec<_>>>()?;
                tracing::debug!(entity = %descriptor.title(), count = items.len(), "Scanned items");
                Ok(ReadOutcome::Items(items))
            }
        }
    }

    /// Strict point read: a missing item is [`ProxyError::NotFound`] and an
    /// absent or unusable identity is [`ProxyError::MissingIdentity`].
    pub async fn read_one(&self, descriptor: &EntityDescriptor, data: &Attributes) -> Result<Attributes> {
        let key = keys::make_identity(descriptor, data)?;
        let item = self
            .lookup(&key)
            .await?
            .ok_or_else(|| not_found(descriptor, data))?;
        self.read_back(descriptor, &item)
    }

    /// Runs the verb named by `verb`. Write verbs yield [`ReadOutcome::Item`].
    pub async fn execute(
        &self,
        verb: Verb,
        descriptor: &EntityDescriptor,
        data: Attributes,
    ) -> Result<ReadOutcome> {
        match verb {
            Verb::Create => self.create(descriptor, data).await.map(ReadOutcome::Item),
            Verb::Replace => self.replace(descriptor, data).await.map(ReadOutcome::Item),
            Verb::PartialUpdate => self
                .partial_update(descriptor, data)
                .await
                .map(ReadOutcome::Item),
            Verb::Delete => self.delete(descriptor, data).await.map(ReadOutcome::Item),
            Verb::Read => self.read(descriptor, &data).await,
        }
    }

    async fn lookup(&self, key: &PrimaryKey) -> Result<Option<Item>> {
        self.store.get_item(key).await.map_err(store_failure)
    }

    async fn write(
        &self,
        descriptor: &EntityDescriptor,
        key: &PrimaryKey,
        item: &Attributes,
    ) -> Result<Item> {
        let stored = codec::encode_attributes(item)
            .map_err(|e| ProxyError::unencodable(descriptor.title(), e))?;
        tracing::debug!(?stored, "Writing item");
        self.store
            .put_item(key, stored.clone())
            .await
            .map_err(store_failure)?;
        Ok(stored)
    }

    fn check_pre(
        &self,
        descriptor: &EntityDescriptor,
        verb: Verb,
        data: &Attributes,
        existing: Option<&Attributes>,
    ) -> Result<()> {
        if descriptor.hooks().pre(verb, data, existing) {
            Ok(())
        } else {
            tracing::debug!(entity = %descriptor.title(), %verb, "Precondition failed");
            Err(ProxyError::PreconditionFailed {
                entity_type: descriptor.title().to_string(),
                verb,
            })
        }
    }

    fn run_post(
        &self,
        descriptor: &EntityDescriptor,
        verb: Verb,
        data: &Attributes,
        existing: Option<&Attributes>,
    ) {
        let status = descriptor.hooks().post(verb, data, existing);
        if status {
            tracing::debug!(entity = %descriptor.title(), %verb, "Postcondition passed");
        } else {
            tracing::warn!(entity = %descriptor.title(), %verb, "Postcondition failed after committed write");
        }
    }

    fn read_back(&self, descriptor: &EntityDescriptor, item: &Item) -> Result<Attributes> {
        Ok(filter_keys(descriptor.primary_key_names(), decode(item)?))
    }
}

fn decode(item: &Item) -> Result<Attributes> {
    codec::decode_item(item).map_err(|e| store_failure(StoreError::InvalidItem(e.to_string())))
}

fn not_found(descriptor: &EntityDescriptor, data: &Attributes) -> ProxyError {
    ProxyError::NotFound {
        entity_type: descriptor.title().to_string(),
        id: keys::identity_label(descriptor, data),
    }
}
