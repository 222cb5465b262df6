use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of one property.
///
/// Serialized as the JSON-schema type name. Any name that is not a built-in
/// type is a custom type resolved through the validator's type registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    Custom(String),
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => Self::String,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            "null" => Self::Null,
            _ => Self::Custom(name),
        }
    }
}

impl From<PropertyType> for String {
    fn from(kind: PropertyType) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
            Self::Custom(name) => name,
        };
        f.write_str(name)
    }
}

/// Constraints on a single property.
///
/// Object values may declare their own `properties` and `required` members,
/// and array values an `items` schema; both are checked recursively. Unlike
/// the top level of an [`EntitySchema`], a nested object accepts undeclared
/// members unless `additionalProperties` is `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,
    #[serde(alias = "min", default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(alias = "max", default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Named string format, resolved through the type registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub required: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl PropertySchema {
    pub fn of(kind: PropertyType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::of(PropertyType::String)
    }

    pub fn integer() -> Self {
        Self::of(PropertyType::Integer)
    }

    pub fn number() -> Self {
        Self::of(PropertyType::Number)
    }

    pub fn boolean() -> Self {
        Self::of(PropertyType::Boolean)
    }

    pub fn uuid4() -> Self {
        Self::of(PropertyType::Custom(super::UUID4_TYPE.to_string()))
    }

    pub fn object() -> Self {
        Self::of(PropertyType::Object)
    }

    /// An array whose elements all satisfy `items`.
    pub fn array_of(items: PropertySchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(PropertyType::Array)
        }
    }

    /// Restricts the property to the given values.
    pub fn one_of<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Inclusive numeric bounds.
    pub fn range(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Inclusive string length bounds, counted in characters.
    pub fn length(mut self, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Inclusive bounds on the number of array elements.
    pub fn item_count(mut self, min_items: Option<usize>, max_items: Option<usize>) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Declares an optional member of an object value.
    pub fn property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Declares a required member of an object value.
    pub fn required_property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        let name = name.into();
        self.required.insert(name.clone());
        self.properties.insert(name, schema);
        self
    }

    pub fn allow_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }
}

/// Declarative shape of an entity kind.
///
/// Deserializes from a JSON-schema style document:
///
/// ```
/// use dynamore_core::schema::EntitySchema;
///
/// let schema: EntitySchema = serde_json::from_str(r#"{
///     "title": "PERSON",
///     "type": "object",
///     "required": ["name"],
///     "properties": {"name": {"type": "string"}},
///     "additionalProperties": false
/// }"#).unwrap();
/// assert_eq!(schema.title, "PERSON");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    pub title: String,
    #[serde(default)]
    pub required: BTreeSet<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub additional_properties: bool,
}

impl EntitySchema {
    /// An empty schema: no properties, nothing required, nothing extra allowed.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            required: BTreeSet::new(),
            properties: BTreeMap::new(),
            additional_properties: false,
        }
    }

    /// Declares an optional property.
    pub fn property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Declares a required property.
    pub fn required_property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        let name = name.into();
        self.required.insert(name.clone());
        self.properties.insert(name, schema);
        self
    }

    pub fn allow_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = allowed;
        self
    }
}
