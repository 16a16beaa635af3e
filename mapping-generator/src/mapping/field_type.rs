//! Field type to property type table.

use mapping_generator_shared::{Field, FieldType, PropertyType};

/// Map a meta-model field type to its search engine property type.
///
/// Unsigned integers map to the next wider signed type, except `uint64` which
/// has a native unsigned target. Arbitrary precision numbers, identifiers,
/// passwords and associations are stored as exact-match keywords. Timestamps
/// are dates in epoch milliseconds.
///
/// Compositions map to `nested` regardless of multiplicity. The referenced
/// entity's own fields are not expanded into the nested mapping.
pub fn property_type_for(field_type: FieldType) -> PropertyType {
    match field_type {
        FieldType::Boolean => PropertyType::Boolean,
        FieldType::Uint8 => PropertyType::Short,
        FieldType::Uint16 => PropertyType::Integer,
        FieldType::Uint32 => PropertyType::Long,
        FieldType::Uint64 => PropertyType::UnsignedLong,
        FieldType::Int8 => PropertyType::Byte,
        FieldType::Int16 => PropertyType::Short,
        FieldType::Int32 => PropertyType::Integer,
        FieldType::Int64 => PropertyType::Long,
        FieldType::Float => PropertyType::Float,
        FieldType::Double => PropertyType::Double,
        FieldType::BigInteger => PropertyType::Keyword,
        FieldType::BigDecimal => PropertyType::Keyword,
        FieldType::Timestamp => PropertyType::epoch_millis_date(),
        FieldType::String => PropertyType::Keyword,
        FieldType::Uuid => PropertyType::Keyword,
        FieldType::Blob => PropertyType::Binary,
        FieldType::Password1Way => PropertyType::Keyword,
        FieldType::Password2Way => PropertyType::Keyword,
        FieldType::Alias => PropertyType::Keyword,
        // Enumeration values are stored by ordinal.
        FieldType::Enumeration => PropertyType::Integer,
        FieldType::Association => PropertyType::Keyword,
        FieldType::Composition => PropertyType::Nested,
    }
}

/// Property type for a field, or `None` if the field's type is not set.
pub fn property_type_for_field(field: &Field) -> Option<PropertyType> {
    field.field_type.map(property_type_for)
}
