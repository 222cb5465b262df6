//! DynamoDB storage backend implementation.
//!
//! Implements `ItemStore` on one table using `aws-sdk-dynamodb`. Every entity
//! kind shares the table; items are addressed by their partition and sort key.

mod conversions;
mod error;
mod store;
mod table;

pub use store::DynamoDbStore;
pub use table::{create_table, delete_table};
