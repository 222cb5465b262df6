//! dynamore - single-table entity storage.
//!
//! The imperative shell around `dynamore_core`: store implementations,
//! environment configuration and the command-line front end.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;

pub use config::{Backend, Config};
pub use error::{CliError, Result};
pub use storage::inmemory::InMemoryStore;

#[cfg(feature = "dynamodb")]
pub use storage::dynamodb::DynamoDbStore;
