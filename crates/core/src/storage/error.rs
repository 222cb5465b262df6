use thiserror::Error;

/// Errors raised by a store implementation.
///
/// These describe failures unrelated to entity logic: connectivity,
/// throttling, or a response the store client could not interpret.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_store_error_query_failed_display() {
        let error = StoreError::QueryFailed("Throughput exceeded, please retry".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: Throughput exceeded, please retry"
        );
    }

    #[test]
    fn test_store_error_serialization_display() {
        let error = StoreError::Serialization("unsupported attribute type".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: unsupported attribute type"
        );
    }

    #[test]
    fn test_store_error_invalid_item_display() {
        let error = StoreError::InvalidItem("missing key attribute PK".to_string());
        assert_eq!(error.to_string(), "Invalid item: missing key attribute PK");
    }
}
