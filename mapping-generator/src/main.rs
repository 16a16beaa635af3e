//! Mapping Generator Main Entry Point
//!
//! Reads a meta-model, generates one index creation request per entity and
//! writes each request body to `<index>.json` in the output directory.

use dotenv::dotenv;
use mapping_generator::{generate, GeneratorConfig, MappingError};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() -> Result<(), MappingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mapping_generator=info"));

    let json_format = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
            .map_err(|e| MappingError::config(format!("Failed to initialize tracing: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init()
            .map_err(|e| MappingError::config(format!("Failed to initialize tracing: {}", e)))?;
    }

    info!(
        service_name = "mapping-generator",
        service_version = env!("CARGO_PKG_VERSION"),
        json_format,
        "Tracing initialized"
    );
    Ok(())
}

fn main() -> Result<(), MappingError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing()?;

    info!("Starting mapping generator");

    let config = match GeneratorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(e);
        }
    };

    match generate(&config) {
        Ok(written) => {
            info!(
                file_count = written.len(),
                output_dir = %config.output_dir.display(),
                "Mapping generator completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Mapping generator failed");
            Err(e)
        }
    }
}
