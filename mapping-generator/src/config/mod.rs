//! Configuration for request generation and for the generator binary.

mod generator_config;
mod mapping_config;

pub use generator_config::GeneratorConfig;
pub use mapping_config::{MappingConfig, UnresolvedFieldPolicy};
