//! Pipeline configuration: YAML schema, loading, and validation
//!
//! The spec is declarative data for the external trainer; this crate
//! loads it, validates it, and reports on it, but never interprets the
//! hyperparameters itself.

mod schema;
mod validate;

pub use schema::{DataSpec, LoraSpec, ModelSpec, PipelineSpec, QuantSpec, TrainingSpec};
pub use validate::validate_config;

use std::path::Path;

use crate::error::{Error, Result};

/// Load a pipeline specification from a YAML file.
///
/// Loading does not validate; call [`validate_config`] before handing the
/// spec to a trainer.
///
/// # Errors
/// Returns a `Config` error if the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PipelineSpec> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {e}",
            path.as_ref().display()
        ))
    })?;

    serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))
}
