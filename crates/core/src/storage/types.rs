use std::collections::HashMap;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Caller-facing attribute map of an entity.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Raw item as held by the store.
pub type Item = HashMap<String, StoredValue>;

/// A single attribute value in the store's representation.
///
/// Numbers are exact decimals; the store has no binary floating-point type.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Null,
    Bool(bool),
    Number(BigDecimal),
    String(String),
    List(Vec<StoredValue>),
    Map(HashMap<String, StoredValue>),
}

impl StoredValue {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoredValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::String(value.to_string())
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::String(value)
    }
}

/// Names of the two primary-key attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyNames {
    pub partition: String,
    pub sort: String,
}

impl KeyNames {
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }

    /// Whether `attribute` is one of the two reserved key attributes.
    pub fn is_key(&self, attribute: &str) -> bool {
        attribute == self.partition || attribute == self.sort
    }
}

impl Default for KeyNames {
    fn default() -> Self {
        Self::new("PK", "SK")
    }
}

/// Full primary key of one item: attribute names plus values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimaryKey {
    pub names: KeyNames,
    pub partition_value: String,
    pub sort_value: String,
}

impl PrimaryKey {
    pub fn new(
        names: KeyNames,
        partition_value: impl Into<String>,
        sort_value: impl Into<String>,
    ) -> Self {
        Self {
            names,
            partition_value: partition_value.into(),
            sort_value: sort_value.into(),
        }
    }

    /// Reads the key out of a raw item, if both key attributes are present strings.
    pub fn from_item(names: &KeyNames, item: &Item) -> Option<Self> {
        let partition_value = item.get(&names.partition)?.as_str()?;
        let sort_value = item.get(&names.sort)?.as_str()?;
        Some(Self::new(names.clone(), partition_value, sort_value))
    }

    /// Key attributes as an attribute map.
    pub fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert(
            self.names.partition.clone(),
            serde_json::Value::String(self.partition_value.clone()),
        );
        attributes.insert(
            self.names.sort.clone(),
            serde_json::Value::String(self.sort_value.clone()),
        );
        attributes
    }
}

impl std::fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={} {}={}",
            self.names.partition, self.partition_value, self.names.sort, self.sort_value
        )
    }
}
