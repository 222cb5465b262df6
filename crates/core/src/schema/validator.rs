use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::{EntitySchema, PropertySchema, PropertyType, TypeRegistry, ValidationError};
use crate::storage::Attributes;

/// Capability to check entity data against a schema.
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, schema: &EntitySchema, data: &Attributes) -> Result<(), ValidationError>;
}

/// Validator following JSON-schema draft semantics for the subset an
/// [`EntitySchema`] can express, extended by a [`TypeRegistry`].
///
/// Checks run in a fixed order and stop at the first failure: required
/// attributes, undeclared attributes, then per-property constraints in
/// attribute name order. Object and array values are checked recursively
/// with the same order. A `format` the registry does not know is ignored, as
/// draft semantics treat it as an annotation.
#[derive(Debug, Clone, Default)]
pub struct DraftValidator {
    registry: TypeRegistry,
}

impl DraftValidator {
    pub fn new(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    fn check_members(
        &self,
        path: &str,
        required: &BTreeSet<String>,
        properties: &BTreeMap<String, PropertySchema>,
        allow_additional: bool,
        data: &Attributes,
    ) -> Result<(), ValidationError> {
        if let Some(missing) = required.iter().find(|name| !data.contains_key(*name)) {
            return Err(ValidationError::MissingRequired(member_path(path, missing)));
        }

        if !allow_additional {
            if let Some(extra) = data.keys().find(|name| !properties.contains_key(*name)) {
                return Err(ValidationError::UndeclaredAttribute(member_path(path, extra)));
            }
        }

        for (name, property) in properties {
            if let Some(value) = data.get(name) {
                self.check_property(&member_path(path, name), property, value)?;
            }
        }

        Ok(())
    }

    fn check_property(
        &self,
        path: &str,
        property: &PropertySchema,
        value: &Value,
    ) -> Result<(), ValidationError> {
        if let Some(kind) = &property.kind {
            self.check_type(path, kind, value)?;
        }

        if let Some(allowed) = &property.allowed {
            if !allowed.contains(value) {
                return Err(ValidationError::NotInEnum(path.to_string()));
            }
        }

        match value {
            Value::Number(n) => {
                if let Some(number) = n.as_f64() {
                    let below = property.minimum.is_some_and(|min| number < min);
                    let above = property.maximum.is_some_and(|max| number > max);
                    if below || above {
                        return Err(ValidationError::OutOfRange(path.to_string()));
                    }
                }
            }
            Value::String(text) => {
                if !within(text.chars().count(), property.min_length, property.max_length) {
                    return Err(ValidationError::InvalidLength(path.to_string()));
                }
                if let Some(format) = &property.format {
                    if self.registry.check(format, value) == Some(false) {
                        return Err(ValidationError::InvalidFormat {
                            attribute: path.to_string(),
                            format: format.clone(),
                        });
                    }
                }
            }
            Value::Array(values) => {
                if !within(values.len(), property.min_items, property.max_items) {
                    return Err(ValidationError::InvalidLength(path.to_string()));
                }
                if let Some(items) = &property.items {
                    for (i, item) in values.iter().enumerate() {
                        self.check_property(&format!("{path}[{i}]"), items, item)?;
                    }
                }
            }
            Value::Object(members) => self.check_members(
                path,
                &property.required,
                &property.properties,
                property.additional_properties.unwrap_or(true),
                members,
            )?,
            Value::Null | Value::Bool(_) => {}
        }

        Ok(())
    }

    fn check_type(
        &self,
        path: &str,
        kind: &PropertyType,
        value: &Value,
    ) -> Result<(), ValidationError> {
        let matches = match kind {
            PropertyType::String => value.is_string(),
            PropertyType::Integer => is_integer(value),
            PropertyType::Number => value.is_number(),
            PropertyType::Boolean => value.is_boolean(),
            PropertyType::Array => value.is_array(),
            PropertyType::Object => value.is_object(),
            PropertyType::Null => value.is_null(),
            PropertyType::Custom(type_name) => {
                self.registry
                    .check(type_name, value)
                    .ok_or_else(|| ValidationError::UnknownType {
                        attribute: path.to_string(),
                        type_name: type_name.clone(),
                    })?
            }
        };

        if matches {
            Ok(())
        } else {
            Err(ValidationError::TypeMismatch {
                attribute: path.to_string(),
                expected: kind.to_string(),
            })
        }
    }
}

impl SchemaValidator for DraftValidator {
    fn validate(&self, schema: &EntitySchema, data: &Attributes) -> Result<(), ValidationError> {
        self.check_members(
            "",
            &schema.required,
            &schema.properties,
            schema.additional_properties,
            data,
        )
    }
}

fn member_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn within(count: usize, min: Option<usize>, max: Option<usize>) -> bool {
    min.is_none_or(|min| count >= min) && max.is_none_or(|max| count <= max)
}

/// Draft semantics: any number with a zero fractional part is an integer.
fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0),
        _ => false,
    }
}
