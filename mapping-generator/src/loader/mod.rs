//! Meta-model loading.
//!
//! Reads a meta-model from its JSON representation. Only the structure is
//! checked here; an unknown field type tag is reported as a parse error.

use std::fs;
use std::path::Path;

use mapping_generator_shared::MetaModel;
use tracing::{debug, instrument};

use crate::errors::MappingError;

/// Parse a meta-model from a JSON string.
pub fn parse_meta_model(json: &str) -> Result<MetaModel, MappingError> {
    serde_json::from_str(json)
        .map_err(|e| MappingError::parse(format!("Invalid meta-model: {}", e)))
}

/// Load a meta-model from a JSON file.
///
/// # Returns
///
/// * `Ok(MetaModel)` - The parsed meta-model
/// * `Err(MappingError)` - If the file cannot be read or is not a valid meta-model
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_meta_model(path: &Path) -> Result<MetaModel, MappingError> {
    let json = fs::read_to_string(path).map_err(|e| {
        MappingError::io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let meta_model = parse_meta_model(&json)?;

    debug!(
        package_count = meta_model.packages.len(),
        entity_count = meta_model.entity_count(),
        "Meta-model loaded"
    );
    Ok(meta_model)
}
