use thiserror::Error;

use crate::codec::CodecError;
use crate::schema::ValidationError;
use crate::storage::StoreError;
use crate::verb::Verb;

/// Errors surfaced by entity construction and proxy operations.
///
/// The variants do not overlap: each failure maps to exactly one of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Invalid {entity_type} data: {reason}")]
    InvalidData { entity_type: String, reason: String },
    #[error("{entity_type} identity attribute `{attribute}` is missing")]
    MissingIdentity {
        entity_type: String,
        attribute: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists { entity_type: String, id: String },
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
    #[error("Precondition failed for {verb} on {entity_type}")]
    PreconditionFailed { entity_type: String, verb: Verb },
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}

impl ProxyError {
    /// Collapses a validator diagnostic into `InvalidData`.
    pub fn invalid(entity_type: &str, err: ValidationError) -> Self {
        Self::InvalidData {
            entity_type: entity_type.to_string(),
            reason: err.to_string(),
        }
    }

    /// Collapses a numeric codec failure into `InvalidData`.
    pub fn unencodable(entity_type: &str, err: CodecError) -> Self {
        Self::InvalidData {
            entity_type: entity_type.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type for proxy operations.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ProxyError::NotFound {
            entity_type: "PERSON".to_string(),
            id: "123456".to_string(),
        };
        assert_eq!(error.to_string(), "PERSON not found: 123456");
    }

    #[test]
    fn test_already_exists_display() {
        let error = ProxyError::AlreadyExists {
            entity_type: "PERSON".to_string(),
            id: "123456".to_string(),
        };
        assert_eq!(error.to_string(), "PERSON already exists: 123456");
    }

    #[test]
    fn test_missing_identity_display() {
        let error = ProxyError::MissingIdentity {
            entity_type: "PERSON".to_string(),
            attribute: "id_number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "PERSON identity attribute `id_number` is missing"
        );
    }

    #[test]
    fn test_precondition_failed_display() {
        let error = ProxyError::PreconditionFailed {
            entity_type: "PERSON".to_string(),
            verb: Verb::Delete,
        };
        assert_eq!(error.to_string(), "Precondition failed for DELETE on PERSON");
    }

    #[test]
    fn test_store_error_is_wrapped() {
        let error: ProxyError = StoreError::QueryFailed("Table not found".to_string()).into();
        assert_eq!(error.to_string(), "Store failure: Query failed: Table not found");
    }

    #[test]
    fn test_validation_error_collapses_to_invalid_data() {
        let error = ProxyError::invalid(
            "PERSON",
            ValidationError::MissingRequired("name".to_string()),
        );
        assert!(matches!(error, ProxyError::InvalidData { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid PERSON data: missing required attribute `name`"
        );
    }
}
