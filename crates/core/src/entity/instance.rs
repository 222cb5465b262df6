use super::{keys, EntityDescriptor};
use crate::error::{ProxyError, Result};
use crate::schema::SchemaValidator;
use crate::storage::{Attributes, KeyNames, PrimaryKey};

/// A validated attribute map bound to its entity kind.
///
/// Construction is the only validation point: an `Entity` always satisfies
/// its descriptor's schema.
#[derive(Debug, Clone)]
pub struct Entity<'a> {
    descriptor: &'a EntityDescriptor,
    attributes: Attributes,
}

impl<'a> Entity<'a> {
    /// Validates `data` against the descriptor's schema.
    ///
    /// Any validator diagnostic is collapsed into [`ProxyError::InvalidData`].
    pub fn new(
        descriptor: &'a EntityDescriptor,
        data: Attributes,
        validator: &dyn SchemaValidator,
    ) -> Result<Self> {
        if let Err(err) = validator.validate(descriptor.schema(), &data) {
            tracing::debug!(entity = %descriptor.title(), error = %err, "Entity validation failed");
            return Err(ProxyError::invalid(descriptor.title(), err));
        }
        Ok(Self {
            descriptor,
            attributes: data,
        })
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Primary key of this entity.
    pub fn identity(&self) -> Result<PrimaryKey> {
        keys::make_identity(self.descriptor, &self.attributes)
    }

    /// Attributes merged with the primary key, then passed through the
    /// augment hook.
    pub fn storable_item(&self) -> Result<Attributes> {
        let identity = self.identity()?;
        let mut item = self.attributes.clone();
        item.extend(identity.to_attributes());
        Ok(self.descriptor.hooks().augment(item))
    }
}

/// Strips the reserved key attributes from an item read from the store.
///
/// No validation happens here: items written under an older schema stay
/// readable.
pub fn filter_keys(key_names: &KeyNames, mut item: Attributes) -> Attributes {
    item.remove(&key_names.partition);
    item.remove(&key_names.sort);
    item
}
