//! Shell error types.

use thiserror::Error;

/// Result type alias for the shell.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised before a request reaches the proxy.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read schema file {path}: {source}")]
    SchemaFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid schema document: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "{0} needs an item stored by an earlier run, but the memory backend keeps nothing \
         between runs; use --backend dynamodb"
    )]
    EphemeralBackend(dynamore_core::Verb),

    #[error("Backend `{0}` is not available in this build")]
    BackendUnavailable(String),

    #[error(transparent)]
    Proxy(#[from] dynamore_core::ProxyError),

    #[error(transparent)]
    Store(#[from] dynamore_core::StoreError),
}
