//! Mapping error types.
//!
//! This module defines the unified error type for mapping generation, covering
//! configuration, meta-model loading, strict-mode type resolution, verification
//! and golden file output.

use thiserror::Error;

/// Unified errors from mapping generation.
///
/// With the default configuration, generating index requests never fails; these
/// errors come from the strict unresolved-field policy, the verifier, or the IO
/// around the core (loading meta-models and writing mapping files).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Failed to read or write a file.
    #[error("IO error: {0}")]
    IoError(String),

    /// Failed to parse a meta-model document.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize a request body.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A field has no resolvable type and the policy forbids dropping it.
    #[error("Unresolved field type for field '{field}' in index '{index}'")]
    UnresolvedFieldType { index: String, field: String },

    /// Generated requests do not match the meta-model.
    #[error("Verification error: {0}")]
    VerificationError(String),
}

impl MappingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an IO error.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::IoError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create an unresolved field type error.
    pub fn unresolved_field_type(index: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnresolvedFieldType {
            index: index.into(),
            field: field.into(),
        }
    }

    /// Create a verification error.
    pub fn verification(msg: impl Into<String>) -> Self {
        Self::VerificationError(msg.into())
    }
}

impl From<std::io::Error> for MappingError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_field_type_message() {
        let err = MappingError::unresolved_field_type("p1__e1", "a");
        assert_eq!(
            err.to_string(),
            "Unresolved field type for field 'a' in index 'p1__e1'"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: MappingError = io.into();
        assert!(matches!(err, MappingError::IoError(_)));
    }
}
