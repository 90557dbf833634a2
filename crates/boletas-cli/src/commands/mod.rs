//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;
pub mod text;

use std::path::Path;

use boletas_core::models::config::BoletasConfig;
use tracing::debug;

/// Load the configuration from `--config`, else from the default location,
/// else fall back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<BoletasConfig> {
    if let Some(path) = config_path {
        return Ok(BoletasConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config at {}", default_path.display());
        Ok(BoletasConfig::from_file(&default_path)?)
    } else {
        Ok(BoletasConfig::default())
    }
}
