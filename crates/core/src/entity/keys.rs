//! Key derivation for the single-table layout.
//!
//! Pure functions. Every item of an entity kind shares the partition value
//! `<title>`, and its sort value is `#<title>#<identity>`. Embedding the title
//! in both keeps kinds from colliding in one table and turns "all items of a
//! kind" into a partition-key equality query.

use serde_json::Value;

use super::EntityDescriptor;
use crate::error::{ProxyError, Result};
use crate::storage::{Attributes, PrimaryKey};

pub const KEY_SEPARATOR: &str = "#";

/// Generate the partition value for an entity kind.
///
/// Pattern: `<title>`
pub fn partition_value(title: &str) -> String {
    title.to_string()
}

/// Generate the sort value for one item.
///
/// Pattern: `#<title>#<identity>`
pub fn sort_value(title: &str, identity: &str) -> String {
    format!("{KEY_SEPARATOR}{title}{KEY_SEPARATOR}{identity}")
}

/// Text form of an identity value embedded in the sort key.
///
/// Strings are used verbatim, other scalars by their JSON text. `null`,
/// lists and maps cannot identify an item.
pub fn identity_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether `data` carries the identity attribute at all, usable or not.
pub fn has_identity_attribute(descriptor: &EntityDescriptor, data: &Attributes) -> bool {
    data.contains_key(descriptor.identity_attribute())
}

/// Derive the primary key of the item `data` identifies.
///
/// Fails with [`ProxyError::MissingIdentity`] when the identity attribute is
/// absent or cannot serve as a key.
pub fn make_identity(descriptor: &EntityDescriptor, data: &Attributes) -> Result<PrimaryKey> {
    let title = descriptor.title();
    let identity = data
        .get(descriptor.identity_attribute())
        .and_then(identity_text)
        .ok_or_else(|| ProxyError::MissingIdentity {
            entity_type: title.to_string(),
            attribute: descriptor.identity_attribute().to_string(),
        })?;

    Ok(PrimaryKey::new(
        descriptor.primary_key_names().clone(),
        partition_value(title),
        sort_value(title, &identity),
    ))
}

/// The identity value as text, for error messages and logs.
pub fn identity_label(descriptor: &EntityDescriptor, data: &Attributes) -> String {
    data.get(descriptor.identity_attribute())
        .and_then(identity_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EntitySchema;
    use crate::storage::KeyNames;
    use serde_json::json;

    fn person() -> EntityDescriptor {
        EntityDescriptor::new(EntitySchema::new("PERSON")).with_identity_attribute("id_number")
    }

    fn data(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_partition_value() {
        assert_eq!(partition_value("PERSON"), "PERSON");
    }

    #[test]
    fn test_sort_value() {
        assert_eq!(sort_value("PERSON", "123456"), "#PERSON#123456");
    }

    #[test]
    fn test_make_identity() {
        let key = make_identity(&person(), &data(json!({"id_number": "123456"}))).unwrap();

        assert_eq!(key.names, KeyNames::default());
        assert_eq!(key.partition_value, "PERSON");
        assert_eq!(key.sort_value, "#PERSON#123456");
    }

    #[test]
    fn test_make_identity_uses_configured_key_names() {
        let descriptor = person().with_key_names(KeyNames::new("pk", "sk"));
        let key = make_identity(&descriptor, &data(json!({"id_number": "1"}))).unwrap();

        assert_eq!(key.names.partition, "pk");
        assert_eq!(key.names.sort, "sk");
    }

    #[test]
    fn test_make_identity_missing_attribute() {
        let result = make_identity(&person(), &data(json!({"name": "Jeanne"})));

        assert_eq!(
            result,
            Err(ProxyError::MissingIdentity {
                entity_type: "PERSON".to_string(),
                attribute: "id_number".to_string(),
            })
        );
    }

    #[test]
    fn test_make_identity_null_is_missing() {
        let result = make_identity(&person(), &data(json!({"id_number": null})));
        assert!(matches!(result, Err(ProxyError::MissingIdentity { .. })));
    }

    #[test]
    fn test_unusable_identity_is_still_present() {
        for value in [json!(null), json!(["a"]), json!({"id": "a"})] {
            let data = data(json!({"id_number": value}));
            assert!(has_identity_attribute(&person(), &data));
            assert!(make_identity(&person(), &data).is_err());
        }
        assert!(!has_identity_attribute(&person(), &data(json!({"name": "Jeanne"}))));
    }

    #[test]
    fn test_numeric_identity_uses_json_text() {
        let key = make_identity(&person(), &data(json!({"id_number": 42}))).unwrap();
        assert_eq!(key.sort_value, "#PERSON#42");
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let order = EntityDescriptor::new(EntitySchema::new("ORDER"));
        let invoice = EntityDescriptor::new(EntitySchema::new("INVOICE"));
        let same_id = data(json!({"uid": "1"}));

        assert_ne!(
            make_identity(&order, &same_id).unwrap(),
            make_identity(&invoice, &same_id).unwrap()
        );
    }
}
