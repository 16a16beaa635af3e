//! # Mapping Generator
//!
//! Translates a meta-model (packages of entities of typed fields) into search
//! index creation requests: one index per entity, one property per field.
//!
//! ## Architecture
//!
//! 1. **Traversal**: Walks packages, entities and fields in document order
//! 2. **Mapping**: Maps each field type to a property type and accumulates them per entity
//! 3. **Assembler**: Turns each finished entity into an `IndexRequest` named `<package>__<entity>`
//! 4. **Verifier**: Checks generated requests against the meta-model
//!
//! The core is synchronous and does no IO. The `loader`, `writer` and
//! `generator` modules wrap it for the `mapping-generator` binary.
//!
//! ## Modules
//!
//! - [`assembler`]: Index request assembly and index naming
//! - [`config`]: Generation and binary configuration
//! - [`errors`]: Error types for the generator
//! - [`generator`]: End-to-end generation run
//! - [`loader`]: Meta-model loading from JSON
//! - [`mapping`]: Field type table and per-entity builder
//! - [`traversal`]: Meta-model visitor and walk
//! - [`verifier`]: Verification of generated requests
//! - [`writer`]: Mapping file output

pub mod assembler;
pub mod config;
pub mod errors;
pub mod generator;
pub mod loader;
pub mod mapping;
pub mod traversal;
pub mod verifier;
pub mod writer;

pub use assembler::{
    create_index_requests, create_index_requests_with_config, index_name, INDEX_NAME_SEPARATOR,
};
pub use config::{GeneratorConfig, MappingConfig, UnresolvedFieldPolicy};
pub use errors::MappingError;
pub use generator::generate;
pub use loader::{load_meta_model, parse_meta_model};
pub use traversal::{meta_model_for_each, MetaModelVisitor, TraversalAction};
pub use verifier::verify_index_requests;
pub use writer::{render_body, write_golden_files};
