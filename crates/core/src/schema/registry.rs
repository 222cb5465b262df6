use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use uuid::{Uuid, Version};

/// Name under which the version-4 UUID check is registered.
pub const UUID4_TYPE: &str = "uuid4";

/// A custom type check: returns true when the value is of the type.
pub type TypeCheck = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Registry of custom type names a schema may reference.
///
/// The built-in JSON types are handled by the validator itself; the registry
/// only holds extensions. `uuid4` is registered by default.
#[derive(Clone)]
pub struct TypeRegistry {
    checks: HashMap<String, TypeCheck>,
}

impl TypeRegistry {
    /// Creates a registry with no custom types.
    pub fn empty() -> Self {
        Self {
            checks: HashMap::new(),
        }
    }

    /// Registers (or replaces) the check for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.checks.insert(name.into(), Arc::new(check));
        self
    }

    /// Runs the check for `name`; `None` when the type is unknown.
    pub fn check(&self, name: &str, value: &Value) -> Option<bool> {
        self.checks.get(name).map(|check| check(value))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(UUID4_TYPE, is_uuid4);
        registry
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.checks.keys().collect();
        names.sort();
        f.debug_struct("TypeRegistry").field("types", &names).finish()
    }
}

/// True for strings holding a version-4 (random) UUID.
pub fn is_uuid4(value: &Value) -> bool {
    value
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .is_some_and(|uuid| uuid.get_version() == Some(Version::Random))
}
