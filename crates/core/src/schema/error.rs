use thiserror::Error;

/// Diagnostic produced by a schema validator.
///
/// Nested attributes are named by path, e.g. `address.city` or `tags[1]`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required attribute `{0}`")]
    MissingRequired(String),
    #[error("attribute `{0}` is not declared in the schema")]
    UndeclaredAttribute(String),
    #[error("attribute `{attribute}` must be of type {expected}")]
    TypeMismatch { attribute: String, expected: String },
    #[error("attribute `{0}` is not one of the allowed values")]
    NotInEnum(String),
    #[error("attribute `{0}` is out of range")]
    OutOfRange(String),
    #[error("attribute `{0}` has an invalid length")]
    InvalidLength(String),
    #[error("attribute `{attribute}` is not a valid {format}")]
    InvalidFormat { attribute: String, format: String },
    #[error("attribute `{attribute}` uses unknown type `{type_name}`")]
    UnknownType { attribute: String, type_name: String },
}
