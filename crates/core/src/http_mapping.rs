//! Pure functions for mapping proxy errors to HTTP status codes.
//!
//! The proxy verbs are modeled on HTTP methods; callers exposing them over
//! HTTP use this mapping to answer with a matching status.

use crate::error::ProxyError;
use crate::storage::StoreError;

/// Maps a [`ProxyError`] to an HTTP status code.
///
/// - `InvalidData` -> 400 (Bad Request)
/// - `MissingIdentity` -> 400 (Bad Request)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `NotFound` -> 404 (Not Found)
/// - `PreconditionFailed` -> 412 (Precondition Failed)
/// - `Store(ConnectionFailed)` -> 503 (Service Unavailable)
/// - any other `Store` failure -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use dynamore_core::error::ProxyError;
/// use dynamore_core::http_mapping::proxy_error_to_status_code;
///
/// let error = ProxyError::NotFound {
///     entity_type: "PERSON".to_string(),
///     id: "123456".to_string(),
/// };
/// assert_eq!(proxy_error_to_status_code(&error), 404);
/// ```
pub fn proxy_error_to_status_code(error: &ProxyError) -> u16 {
    match error {
        ProxyError::InvalidData { .. } => 400,
        ProxyError::MissingIdentity { .. } => 400,
        ProxyError::AlreadyExists { .. } => 409,
        ProxyError::NotFound { .. } => 404,
        ProxyError::PreconditionFailed { .. } => 412,
        ProxyError::Store(StoreError::ConnectionFailed(_)) => 503,
        ProxyError::Store(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verb::Verb;

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = ProxyError::InvalidData {
            entity_type: "PERSON".to_string(),
            reason: "missing required attribute `name`".to_string(),
        };
        assert_eq!(proxy_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_missing_identity_maps_to_400() {
        let error = ProxyError::MissingIdentity {
            entity_type: "PERSON".to_string(),
            attribute: "id_number".to_string(),
        };
        assert_eq!(proxy_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let error = ProxyError::AlreadyExists {
            entity_type: "PERSON".to_string(),
            id: "123456".to_string(),
        };
        assert_eq!(proxy_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_precondition_failed_maps_to_412() {
        let error = ProxyError::PreconditionFailed {
            entity_type: "PERSON".to_string(),
            verb: Verb::Replace,
        };
        assert_eq!(proxy_error_to_status_code(&error), 412);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = ProxyError::Store(StoreError::ConnectionFailed("timeout".to_string()));
        assert_eq!(proxy_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = ProxyError::Store(StoreError::QueryFailed("throttled".to_string()));
        assert_eq!(proxy_error_to_status_code(&error), 500);
    }
}
