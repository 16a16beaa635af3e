//! Mapping file output.
//!
//! Writes one `<index>.json` file per request holding the pretty-printed index
//! creation body. Object keys are sorted so files are stable between runs.

use std::fs;
use std::path::{Path, PathBuf};

use mapping_generator_shared::IndexRequest;
use tracing::{debug, info, instrument};

use crate::errors::MappingError;

/// Render the pretty-printed creation body of a request, with a trailing newline.
pub fn render_body(request: &IndexRequest) -> Result<String, MappingError> {
    let body = request.body().map_err(|e| {
        MappingError::serialization(format!("Failed to serialize {}: {}", request.index, e))
    })?;
    let mut pretty = serde_json::to_string_pretty(&body).map_err(|e| {
        MappingError::serialization(format!("Failed to serialize {}: {}", request.index, e))
    })?;
    pretty.push('\n');
    Ok(pretty)
}

/// Write the creation body of every request to `output_dir`.
///
/// The directory is created if it does not exist. Existing files for the same
/// index are overwritten.
///
/// # Returns
///
/// The paths written, in request order.
#[instrument(skip(requests, output_dir), fields(request_count = requests.len(), output_dir = %output_dir.display()))]
pub fn write_golden_files(
    requests: &[IndexRequest],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, MappingError> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(requests.len());
    for request in requests {
        let path = output_dir.join(format!("{}.json", request.index));
        fs::write(&path, render_body(request)?)?;

        debug!(index = %request.index, path = %path.display(), "Mapping file written");
        written.push(path);
    }

    info!(file_count = written.len(), "Mapping files written");
    Ok(written)
}
