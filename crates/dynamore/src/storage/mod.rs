//! Store implementations for the `ItemStore` trait.
//!
//! The in-memory store is always compiled; the DynamoDB store sits behind the
//! `dynamodb` feature.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod inmemory;
