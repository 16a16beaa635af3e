//! Error types for the mapping generator.
//!
//! This module provides a unified error type for all generator operations.

mod mapping_error;

pub use mapping_error::MappingError;
