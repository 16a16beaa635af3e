//! This module defines the core data structures used across the mapping generator.
//! It re-exports the meta-model tree and the index request types.

pub mod index_request;
pub mod meta_model;

pub use index_request::{IndexRequest, IndexSettings, PropertyType, TypeMapping};
pub use meta_model::{Entity, EntityRef, Field, FieldType, MetaModel, Multiplicity, Package};
