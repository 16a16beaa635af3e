//! # Mapping Generator Shared
//!
//! This crate defines the data structures shared across the mapping generator.
//! It includes the meta-model tree consumed by the generator (packages, entities
//! and fields) and the index creation requests it produces.

pub mod types;

pub use types::index_request::{
    IndexRequest, IndexSettings, PropertyType, TypeMapping, EPOCH_MILLIS,
};
pub use types::meta_model::{Entity, EntityRef, Field, FieldType, MetaModel, Multiplicity, Package};
