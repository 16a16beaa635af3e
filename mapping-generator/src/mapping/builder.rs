//! Per-entity property accumulation.

use std::collections::BTreeMap;

use mapping_generator_shared::{PropertyType, TypeMapping};

/// Accumulates the property mappings of one entity.
///
/// Opened when an entity is entered and consumed by `build` when it is left.
/// Adding a property under an existing name replaces the earlier one.
#[derive(Debug, Default)]
pub struct EntityMappingBuilder {
    properties: BTreeMap<String, PropertyType>,
}

impl EntityMappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property for a field.
    ///
    /// # Returns
    ///
    /// The property previously mapped under `field_name`, if any.
    pub fn add_property(
        &mut self,
        field_name: impl Into<String>,
        property: PropertyType,
    ) -> Option<PropertyType> {
        self.properties.insert(field_name.into(), property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Finish the entity, producing its type mapping.
    pub fn build(self) -> TypeMapping {
        TypeMapping::new(self.properties)
    }
}
