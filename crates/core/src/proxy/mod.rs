//! CRUD orchestration over an [`ItemStore`](crate::storage::ItemStore).

mod outcome;
mod query;
mod store_proxy;

pub use outcome::ReadOutcome;
pub use query::{query, QueryResponse};
pub use store_proxy::{ProxyOptions, StoreProxy};
