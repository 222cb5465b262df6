//! dynamore_core - functional core of the dynamore single-table entity layer.
//!
//! Entity kinds are described by an [`EntityDescriptor`]: a typed schema, the
//! attribute that carries the item identity, the partition/sort key names and
//! optional hooks. The [`StoreProxy`] drives create, replace, partial update,
//! delete and read against any [`ItemStore`] implementation.

pub mod codec;
pub mod entity;
pub mod error;
pub mod http_mapping;
pub mod proxy;
pub mod schema;
pub mod storage;
pub mod verb;

pub use entity::{Entity, EntityDescriptor, Hooks};
pub use error::{ProxyError, Result};
pub use proxy::{ProxyOptions, ReadOutcome, StoreProxy};
pub use schema::{DraftValidator, EntitySchema, PropertySchema, PropertyType, SchemaValidator};
pub use storage::{Attributes, Item, ItemStore, KeyNames, PrimaryKey, StoreError, StoredValue};
pub use verb::Verb;
