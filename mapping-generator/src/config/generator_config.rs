//! Configuration for the mapping generator binary.

use std::env;
use std::path::PathBuf;

use tracing::info;

use super::MappingConfig;
use crate::errors::MappingError;

/// Default directory for generated mapping files.
const DEFAULT_OUTPUT_DIR: &str = "mappings";

/// Everything the generator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the meta-model JSON document.
    pub meta_model_path: PathBuf,
    /// Directory the `<index>.json` files are written to.
    pub output_dir: PathBuf,
    /// Request generation settings.
    pub mapping: MappingConfig,
}

impl GeneratorConfig {
    pub fn new(meta_model_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            meta_model_path: meta_model_path.into(),
            output_dir: output_dir.into(),
            mapping: MappingConfig::default(),
        }
    }

    pub fn with_mapping(mut self, mapping: MappingConfig) -> Self {
        self.mapping = mapping;
        self
    }

    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `META_MODEL_PATH`: Path of the meta-model JSON document (required)
    /// - `MAPPINGS_OUTPUT_DIR`: Output directory (default: mappings)
    /// - `UNRESOLVED_FIELD_POLICY`: "skip", "warn" or "fail" (default: skip)
    /// - `INDEX_NUMBER_OF_SHARDS`: Shard count for every index (optional)
    /// - `INDEX_NUMBER_OF_REPLICAS`: Replica count for every index (optional)
    ///
    /// # Returns
    ///
    /// * `Ok(GeneratorConfig)` - The configuration
    /// * `Err(MappingError)` - If `META_MODEL_PATH` is not set
    pub fn from_env() -> Result<Self, MappingError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, MappingError> {
        let meta_model_path = lookup("META_MODEL_PATH")
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| MappingError::config("META_MODEL_PATH is not set"))?;
        let output_dir =
            lookup("MAPPINGS_OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        let mapping = MappingConfig::from_lookup(lookup);

        info!(
            meta_model_path = %meta_model_path,
            output_dir = %output_dir,
            unresolved_field_policy = ?mapping.unresolved_field_policy,
            settings = ?mapping.settings,
            "Loaded generator configuration"
        );

        Ok(Self::new(meta_model_path, output_dir).with_mapping(mapping))
    }
}
