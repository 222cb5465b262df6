mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::ItemStore;
pub use types::{Attributes, Item, KeyNames, PrimaryKey, StoredValue};
