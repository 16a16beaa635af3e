//! End-to-end generation run: load, map, verify, write.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::assembler::create_index_requests_with_config;
use crate::config::GeneratorConfig;
use crate::errors::MappingError;
use crate::loader::load_meta_model;
use crate::verifier::verify_index_requests;
use crate::writer::write_golden_files;

/// Generate the mapping files described by `config`.
///
/// Requests are verified against the meta-model before anything is written.
///
/// # Returns
///
/// The paths of the written mapping files, one per entity.
#[instrument(skip(config), fields(meta_model_path = %config.meta_model_path.display()))]
pub fn generate(config: &GeneratorConfig) -> Result<Vec<PathBuf>, MappingError> {
    let meta_model = load_meta_model(&config.meta_model_path)?;
    let requests = create_index_requests_with_config(&meta_model, &config.mapping)?;
    verify_index_requests(&meta_model, &requests)?;
    let written = write_golden_files(&requests, &config.output_dir)?;

    info!(
        entity_count = meta_model.entity_count(),
        file_count = written.len(),
        "Mapping generation complete"
    );
    Ok(written)
}
