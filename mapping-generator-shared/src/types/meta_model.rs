//! Meta-model tree types.
//!
//! A meta-model is an ordered collection of packages, each holding an ordered
//! collection of entities, each holding an ordered collection of typed fields.
//! The generator only reads this tree; building it is up to the caller.

use serde::{Deserialize, Serialize};

/// Root of the meta-model tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaModel {
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl MetaModel {
    /// Create a meta-model from its packages.
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Total number of entities across all packages.
    pub fn entity_count(&self) -> usize {
        self.packages.iter().map(|p| p.entities.len()).sum()
    }
}

/// A named group of entities. Package names are unique within a meta-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Package {
    pub fn new(name: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self {
            name: name.into(),
            entities,
        }
    }
}

/// A named record type. Entity names are unique within their package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// A named, typed attribute of an entity.
///
/// # Fields
///
/// - `name`: Field name, unique within the entity
/// - `field_type`: Semantic type; `None` when the type could not be resolved
/// - `multiplicity`: Whether the field holds one value or a set of values
/// - `entity`: Target entity for association and composition fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default)]
    pub multiplicity: Multiplicity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
}

impl Field {
    /// Create a single-valued field of the given type.
    ///
    /// # Example
    ///
    /// ```
    /// use mapping_generator_shared::{Field, FieldType, Multiplicity};
    ///
    /// let field = Field::new("first_name", FieldType::String);
    /// assert_eq!(field.multiplicity, Multiplicity::Single);
    /// ```
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type: Some(field_type),
            multiplicity: Multiplicity::Single,
            entity: None,
        }
    }

    /// Create a field whose type is not set.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: None,
            multiplicity: Multiplicity::Single,
            entity: None,
        }
    }

    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    pub fn with_entity(mut self, entity: EntityRef) -> Self {
        self.entity = Some(entity);
        self
    }
}

/// Reference from an association or composition field to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    pub package: String,
    pub entity: String,
}

impl EntityRef {
    pub fn new(package: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            entity: entity.into(),
        }
    }
}

/// Number of values a field holds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Multiplicity {
    #[default]
    Single,
    Set,
}

/// Semantic field types of the meta-model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Timestamp,
    String,
    Uuid,
    Blob,
    #[serde(rename = "password1way", alias = "password_one_way")]
    Password1Way,
    #[serde(rename = "password2way", alias = "password_two_way")]
    Password2Way,
    Alias,
    Enumeration,
    Association,
    Composition,
}

impl FieldType {
    /// Every field type, in declaration order.
    pub const ALL: [FieldType; 23] = [
        FieldType::Boolean,
        FieldType::Uint8,
        FieldType::Uint16,
        FieldType::Uint32,
        FieldType::Uint64,
        FieldType::Int8,
        FieldType::Int16,
        FieldType::Int32,
        FieldType::Int64,
        FieldType::Float,
        FieldType::Double,
        FieldType::BigInteger,
        FieldType::BigDecimal,
        FieldType::Timestamp,
        FieldType::String,
        FieldType::Uuid,
        FieldType::Blob,
        FieldType::Password1Way,
        FieldType::Password2Way,
        FieldType::Alias,
        FieldType::Enumeration,
        FieldType::Association,
        FieldType::Composition,
    ];
}
