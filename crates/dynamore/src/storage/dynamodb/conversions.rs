//! DynamoDB attribute conversion functions.
//!
//! Pure functions between `StoredValue` items and `AttributeValue` maps.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use dynamore_core::codec::parse_decimal;
use dynamore_core::storage::Result;
use dynamore_core::{Item, PrimaryKey, StoreError, StoredValue};

/// Convert a stored value to its DynamoDB attribute.
pub fn to_attribute_value(value: &StoredValue) -> AttributeValue {
    match value {
        StoredValue::Null => AttributeValue::Null(true),
        StoredValue::Bool(b) => AttributeValue::Bool(*b),
        StoredValue::Number(n) => AttributeValue::N(n.to_string()),
        StoredValue::String(s) => AttributeValue::S(s.clone()),
        StoredValue::List(values) => {
            AttributeValue::L(values.iter().map(to_attribute_value).collect())
        }
        StoredValue::Map(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), to_attribute_value(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute to a stored value.
///
/// String and number sets read back as lists. Binary attributes are not part
/// of the entity model and are rejected.
pub fn from_attribute_value(value: &AttributeValue) -> Result<StoredValue> {
    match value {
        AttributeValue::Null(_) => Ok(StoredValue::Null),
        AttributeValue::Bool(b) => Ok(StoredValue::Bool(*b)),
        AttributeValue::N(text) => number(text),
        AttributeValue::S(s) => Ok(StoredValue::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(from_attribute_value)
            .collect::<Result<Vec<_>>>()
            .map(StoredValue::List),
        AttributeValue::M(map) => attributes_to_item(map).map(StoredValue::Map),
        AttributeValue::Ss(values) => Ok(StoredValue::List(
            values.iter().cloned().map(StoredValue::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|text| number(text))
            .collect::<Result<Vec<_>>>()
            .map(StoredValue::List),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(StoreError::InvalidItem(
            "binary attributes are not supported".to_string(),
        )),
        other => Err(StoreError::InvalidItem(format!(
            "unsupported attribute value: {other:?}"
        ))),
    }
}

/// Convert an item to a DynamoDB attribute map.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    item.iter()
        .map(|(k, v)| (k.clone(), to_attribute_value(v)))
        .collect()
}

/// Convert a DynamoDB attribute map to an item.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> Result<Item> {
    attributes
        .iter()
        .map(|(k, v)| Ok((k.clone(), from_attribute_value(v)?)))
        .collect()
}

/// Key attributes of a GetItem or DeleteItem request.
pub fn key_attributes(key: &PrimaryKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            key.names.partition.clone(),
            AttributeValue::S(key.partition_value.clone()),
        ),
        (
            key.names.sort.clone(),
            AttributeValue::S(key.sort_value.clone()),
        ),
    ])
}

fn number(text: &str) -> Result<StoredValue> {
    parse_decimal(text)
        .map(StoredValue::Number)
        .map_err(|e| StoreError::InvalidItem(e.to_string()))
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::primitives::Blob;
    use bigdecimal::BigDecimal;
    use dynamore_core::codec::{decode_value, encode_value};
    use dynamore_core::KeyNames;
    use serde_json::json;

    use super::*;

    fn decimal(text: &str) -> StoredValue {
        StoredValue::Number(text.parse::<BigDecimal>().unwrap())
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(to_attribute_value(&StoredValue::Null), AttributeValue::Null(true));
        assert_eq!(
            to_attribute_value(&StoredValue::Bool(true)),
            AttributeValue::Bool(true)
        );
        assert_eq!(
            to_attribute_value(&decimal("1.68")),
            AttributeValue::N("1.68".to_string())
        );
        assert_eq!(
            to_attribute_value(&StoredValue::from("Jeanne")),
            AttributeValue::S("Jeanne".to_string())
        );
    }

    #[test]
    fn test_nested_item_survives_conversion() {
        let mut address = HashMap::new();
        address.insert("city".to_string(), StoredValue::from("Paris"));
        address.insert("floor".to_string(), decimal("3"));

        let mut item = Item::new();
        item.insert("PK".to_string(), StoredValue::from("PERSON"));
        item.insert("address".to_string(), StoredValue::Map(address));
        item.insert(
            "tags".to_string(),
            StoredValue::List(vec![StoredValue::from("a"), StoredValue::Null]),
        );

        let converted = attributes_to_item(&item_to_attributes(&item)).unwrap();
        assert_eq!(converted, item);
    }

    #[test]
    fn test_scientific_number_from_store() {
        let value = from_attribute_value(&AttributeValue::N("1.5E3".to_string())).unwrap();
        assert_eq!(value, decimal("1500"));
    }

    #[test]
    fn test_wide_numbers_survive_the_attribute_form() {
        for v in [6.62607015e-34, 1e-7, 1.5e30, 1e100] {
            let stored = encode_value(&json!(v)).unwrap();
            let back = from_attribute_value(&to_attribute_value(&stored)).unwrap();
            assert_eq!(decode_value(&back).unwrap(), json!(v), "value {v}");
        }
    }

    #[test]
    fn test_number_beyond_float_precision_from_store() {
        let text = "1234567890.1234567890123456789012345678";
        let value = from_attribute_value(&AttributeValue::N(text.to_string())).unwrap();
        assert_eq!(value, decimal(text));
        assert_eq!(
            decode_value(&value).unwrap(),
            json!(1234567890.1234567890123456789012345678_f64)
        );
    }

    #[test]
    fn test_sets_read_back_as_lists() {
        let strings = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            from_attribute_value(&strings).unwrap(),
            StoredValue::List(vec![StoredValue::from("a"), StoredValue::from("b")])
        );

        let numbers = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);
        assert_eq!(
            from_attribute_value(&numbers).unwrap(),
            StoredValue::List(vec![
                decimal("1"),
                decimal("2.5"),
            ])
        );
    }

    #[test]
    fn test_binary_is_rejected() {
        let result = from_attribute_value(&AttributeValue::B(Blob::new(vec![1, 2])));
        assert!(matches!(result, Err(StoreError::InvalidItem(_))));
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let result = from_attribute_value(&AttributeValue::N("twelve".to_string()));
        assert!(matches!(result, Err(StoreError::InvalidItem(_))));
    }

    #[test]
    fn test_key_attributes() {
        let key = PrimaryKey::new(KeyNames::new("pk", "sk"), "PERSON", "#PERSON#1");
        let attributes = key_attributes(&key);

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes["pk"], AttributeValue::S("PERSON".to_string()));
        assert_eq!(attributes["sk"], AttributeValue::S("#PERSON#1".to_string()));
    }
}
