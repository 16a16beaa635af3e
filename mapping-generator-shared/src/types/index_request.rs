//! Index creation request types.
//!
//! This module defines the descriptors produced for each entity: the property
//! types of the search engine, the per-index type mapping, and the request that
//! pairs an index name with its mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Date format used for every timestamp property.
pub const EPOCH_MILLIS: &str = "epoch_millis";

/// Search engine property types.
///
/// Serialized in the engine's native shape, e.g. `{"type": "keyword"}` or
/// `{"type": "date", "format": "epoch_millis"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyType {
    Boolean,
    Short,
    Integer,
    Long,
    UnsignedLong,
    Byte,
    Float,
    Double,
    Keyword,
    Date { format: String },
    Binary,
    Nested,
}

impl PropertyType {
    /// A `date` property stored as milliseconds since the epoch.
    pub fn epoch_millis_date() -> Self {
        Self::Date {
            format: EPOCH_MILLIS.to_string(),
        }
    }

    /// The engine's name for this property type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned_long",
            Self::Byte => "byte",
            Self::Float => "float",
            Self::Double => "double",
            Self::Keyword => "keyword",
            Self::Date { .. } => "date",
            Self::Binary => "binary",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date { format } => write!(f, "date(format={})", format),
            other => f.write_str(other.type_name()),
        }
    }
}

/// Property mappings of one index, keyed by field name.
///
/// Properties are kept sorted by name so serialized mappings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMapping {
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyType>,
}

impl TypeMapping {
    pub fn new(properties: BTreeMap<String, PropertyType>) -> Self {
        Self { properties }
    }

    /// Look up the property mapped for a field.
    pub fn property(&self, field_name: &str) -> Option<&PropertyType> {
        self.properties.get(field_name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Optional shard and replica settings attached to each index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_shards: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_replicas: Option<u32>,
}

impl IndexSettings {
    pub fn new(number_of_shards: Option<u32>, number_of_replicas: Option<u32>) -> Self {
        Self {
            number_of_shards,
            number_of_replicas,
        }
    }

    /// Returns true if no setting is specified.
    pub fn is_empty(&self) -> bool {
        self.number_of_shards.is_none() && self.number_of_replicas.is_none()
    }
}

/// Request to create one search index.
///
/// One request is produced per meta-model entity. The `index` name is the
/// package name and the entity name joined with `__`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRequest {
    pub index: String,
    pub mappings: TypeMapping,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<IndexSettings>,
}

/// Body of an index creation call, borrowed from an `IndexRequest`.
#[derive(Serialize)]
struct CreateIndexBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<&'a IndexSettings>,
    mappings: &'a TypeMapping,
}

impl IndexRequest {
    pub fn new(index: impl Into<String>, mappings: TypeMapping) -> Self {
        Self {
            index: index.into(),
            mappings,
            settings: None,
        }
    }

    /// Attach index settings; empty settings are dropped.
    pub fn with_settings(mut self, settings: IndexSettings) -> Self {
        self.settings = if settings.is_empty() {
            None
        } else {
            Some(settings)
        };
        self
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Render the index creation body.
    ///
    /// # Returns
    ///
    /// A JSON object of the form `{"settings": {...}, "mappings": {"properties": {...}}}`,
    /// where `settings` is present only if the request carries settings.
    pub fn body(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(CreateIndexBody {
            settings: self.settings.as_ref(),
            mappings: &self.mappings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_mapping() -> TypeMapping {
        let mut properties = BTreeMap::new();
        properties.insert("name".to_string(), PropertyType::Keyword);
        properties.insert("created_on".to_string(), PropertyType::epoch_millis_date());
        properties.insert("children".to_string(), PropertyType::Nested);
        TypeMapping::new(properties)
    }

    #[test]
    fn test_property_type_serialization() {
        assert_eq!(
            serde_json::to_value(PropertyType::Keyword).unwrap(),
            json!({ "type": "keyword" })
        );
        assert_eq!(
            serde_json::to_value(PropertyType::UnsignedLong).unwrap(),
            json!({ "type": "unsigned_long" })
        );
        assert_eq!(
            serde_json::to_value(PropertyType::epoch_millis_date()).unwrap(),
            json!({ "type": "date", "format": "epoch_millis" })
        );
    }

    #[test]
    fn test_property_type_deserialization() {
        let property: PropertyType =
            serde_json::from_value(json!({ "type": "date", "format": "epoch_millis" })).unwrap();
        assert_eq!(property, PropertyType::epoch_millis_date());

        let property: PropertyType = serde_json::from_value(json!({ "type": "byte" })).unwrap();
        assert_eq!(property, PropertyType::Byte);
    }

    #[test]
    fn test_type_name_matches_serialized_tag() {
        let all = [
            PropertyType::Boolean,
            PropertyType::Short,
            PropertyType::Integer,
            PropertyType::Long,
            PropertyType::UnsignedLong,
            PropertyType::Byte,
            PropertyType::Float,
            PropertyType::Double,
            PropertyType::Keyword,
            PropertyType::epoch_millis_date(),
            PropertyType::Binary,
            PropertyType::Nested,
        ];

        for property in all {
            let value = serde_json::to_value(&property).unwrap();
            assert_eq!(value["type"], property.type_name());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyType::Long.to_string(), "long");
        assert_eq!(
            PropertyType::epoch_millis_date().to_string(),
            "date(format=epoch_millis)"
        );
    }

    #[test]
    fn test_body_without_settings() {
        let request = IndexRequest::new("p1__e1", sample_mapping());
        let body = request.body().unwrap();

        assert_eq!(
            body,
            json!({
                "mappings": {
                    "properties": {
                        "children": { "type": "nested" },
                        "created_on": { "type": "date", "format": "epoch_millis" },
                        "name": { "type": "keyword" }
                    }
                }
            })
        );
        assert!(body.get("settings").is_none());
    }

    #[test]
    fn test_body_with_settings() {
        let request = IndexRequest::new("p1__e1", TypeMapping::default())
            .with_settings(IndexSettings::new(Some(1), None));
        let body = request.body().unwrap();

        assert_eq!(body["settings"], json!({ "number_of_shards": 1 }));
        assert_eq!(body["mappings"], json!({ "properties": {} }));
    }

    #[test]
    fn test_empty_settings_are_dropped() {
        let request =
            IndexRequest::new("p1__e1", TypeMapping::default()).with_settings(IndexSettings::default());
        assert!(request.settings.is_none());
    }

    #[test]
    fn test_type_mapping_lookup() {
        let mapping = sample_mapping();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.property("name"), Some(&PropertyType::Keyword));
        assert_eq!(mapping.property("missing"), None);
        assert!(TypeMapping::default().is_empty());
    }
}
