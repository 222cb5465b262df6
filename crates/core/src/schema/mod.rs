//! Entity schemas and their validation.
//!
//! A schema is plain typed data ([`EntitySchema`]); checking data against it
//! goes through the [`SchemaValidator`] capability so the engine can be
//! swapped without touching entity logic.

mod error;
mod registry;
mod types;
mod validator;

pub use error::ValidationError;
pub use registry::{is_uuid4, TypeCheck, TypeRegistry, UUID4_TYPE};
pub use types::{EntitySchema, PropertySchema, PropertyType};
pub use validator::{DraftValidator, SchemaValidator};
