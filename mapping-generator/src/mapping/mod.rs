//! Field type mapping and per-entity mapping accumulation.

mod builder;
mod field_type;

pub use builder::EntityMappingBuilder;
pub use field_type::{property_type_for, property_type_for_field};
