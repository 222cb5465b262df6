//! In-memory storage backend for testing.
//!
//! Items live in a `BTreeMap` keyed by primary key, wrapped in
//! `Arc<RwLock<_>>`. Clones share the same data. Nothing is persisted.
//!
//! # Example
//!
//! ```rust
//! use dynamore::InMemoryStore;
//! use dynamore_core::StoreProxy;
//!
//! let store = InMemoryStore::new();
//! let proxy = StoreProxy::new(store.clone());
//! // `store` and `proxy.store()` see the same items.
//! ```

mod store;

pub use store::InMemoryStore;
