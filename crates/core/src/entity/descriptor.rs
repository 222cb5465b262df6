use std::sync::Arc;

use super::Hooks;
use crate::schema::EntitySchema;
use crate::storage::{Attributes, KeyNames};
use crate::verb::Verb;

/// Identity attribute used when an entity kind does not name one.
pub const DEFAULT_IDENTITY_ATTRIBUTE: &str = "uid";

/// Static definition of one entity kind.
///
/// Holds the schema, the name of the attribute that supplies the item
/// identity, the primary-key attribute names and the hook functions.
///
/// ```
/// use dynamore_core::{EntityDescriptor, EntitySchema, PropertySchema};
///
/// let person = EntityDescriptor::new(
///     EntitySchema::new("PERSON").required_property("id_number", PropertySchema::string()),
/// )
/// .with_identity_attribute("id_number");
///
/// assert_eq!(person.title(), "PERSON");
/// assert_eq!(person.primary_key_names().partition, "PK");
/// ```
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    schema: EntitySchema,
    identity_attribute: String,
    key_names: KeyNames,
    hooks: Hooks,
}

impl EntityDescriptor {
    pub fn new(schema: EntitySchema) -> Self {
        Self {
            schema,
            identity_attribute: DEFAULT_IDENTITY_ATTRIBUTE.to_string(),
            key_names: KeyNames::default(),
            hooks: Hooks::default(),
        }
    }

    /// Builds a descriptor from a JSON-schema style document.
    pub fn from_json_schema(
        document: &str,
        identity_attribute: impl Into<String>,
    ) -> Result<Self, serde_json::Error> {
        let schema: EntitySchema = serde_json::from_str(document)?;
        Ok(Self::new(schema).with_identity_attribute(identity_attribute))
    }

    pub fn with_identity_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.identity_attribute = attribute.into();
        self
    }

    pub fn with_key_names(mut self, key_names: KeyNames) -> Self {
        self.key_names = key_names;
        self
    }

    pub fn with_pre_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Verb, &Attributes, Option<&Attributes>) -> bool + Send + Sync + 'static,
    {
        self.hooks.pre = Arc::new(hook);
        self
    }

    pub fn with_post_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Verb, &Attributes, Option<&Attributes>) -> bool + Send + Sync + 'static,
    {
        self.hooks.post = Arc::new(hook);
        self
    }

    pub fn with_augment_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Attributes) -> Attributes + Send + Sync + 'static,
    {
        self.hooks.augment = Arc::new(hook);
        self
    }

    /// Entity kind name; also the partition value of every item of this kind.
    pub fn title(&self) -> &str {
        &self.schema.title
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn identity_attribute(&self) -> &str {
        &self.identity_attribute
    }

    pub fn primary_key_names(&self) -> &KeyNames {
        &self.key_names
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let descriptor = EntityDescriptor::new(EntitySchema::new("ENTITY"));

        assert_eq!(descriptor.title(), "ENTITY");
        assert_eq!(descriptor.identity_attribute(), "uid");
        assert_eq!(descriptor.primary_key_names(), &KeyNames::new("PK", "SK"));
    }

    #[test]
    fn test_key_names_override() {
        let descriptor = EntityDescriptor::new(EntitySchema::new("ORDER"))
            .with_key_names(KeyNames::new("pk", "sk"));

        assert_eq!(descriptor.primary_key_names().partition, "pk");
        assert_eq!(descriptor.primary_key_names().sort, "sk");
    }

    #[test]
    fn test_from_json_schema() {
        let descriptor = EntityDescriptor::from_json_schema(
            r#"{"title": "PERSON", "required": ["id_number"],
                "properties": {"id_number": {"type": "string"}}}"#,
            "id_number",
        )
        .unwrap();

        assert_eq!(descriptor.title(), "PERSON");
        assert_eq!(descriptor.identity_attribute(), "id_number");
        assert!(descriptor.schema().required.contains("id_number"));
    }

    #[test]
    fn test_from_json_schema_rejects_malformed_document() {
        assert!(EntityDescriptor::from_json_schema("{\"required\": []}", "uid").is_err());
    }

    #[test]
    fn test_hooks_are_installed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let descriptor = EntityDescriptor::new(EntitySchema::new("ENTITY"))
            .with_pre_hook(move |verb, _, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                verb != Verb::Delete
            })
            .with_augment_hook(|mut item| {
                item.insert("derived".to_string(), json!(true));
                item
            });

        let item = Attributes::new();
        assert!(descriptor.hooks().pre(Verb::Create, &item, None));
        assert!(!descriptor.hooks().pre(Verb::Delete, &item, None));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(descriptor.hooks().augment(item)["derived"], json!(true));
    }
}
