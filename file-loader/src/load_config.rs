/// `load_config` module: reads a YAML load description and applies environment overrides.
///
/// This is the only place where user-supplied YAML is parsed. The schema is
/// [`LoadConfig`] from `file-loader-core`; this module only adds file handling,
/// environment overrides and CLI-grade diagnostics.
///
/// # Environment
/// - `FILE_LOADER_BASE_DIR` replaces `base_dir` from the file when set.
///
/// # Errors
/// All errors use `anyhow::Error` and are surfaced at the CLI boundary.
use anyhow::{Context, Result};
use file_loader_core::config::LoadConfig;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const BASE_DIR_ENV: &str = "FILE_LOADER_BASE_DIR";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LoadConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
        anyhow::anyhow!("Failed to read config file {:?}: {}", path_ref, e)
    })?;

    let mut config: LoadConfig = serde_yaml::from_str(&config_content)
        .map_err(|e| {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            e
        })
        .with_context(|| format!("Failed to parse config YAML {:?}", path_ref))?;

    if let Ok(base_dir) = std::env::var(BASE_DIR_ENV) {
        info!(base_dir = %base_dir, "Overriding base_dir from environment");
        config.base_dir = base_dir.into();
    }

    config.trace_loaded();
    Ok(config)
}
