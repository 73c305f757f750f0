//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto the `ViewerConfig` DTO. No defaults
//! and no validation happen here; `cs_app::settings` owns that policy.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cs_core::ViewerConfig;

/// Load configuration from a TOML file.
///
/// Missing keys are accepted and map to empty values; unknown values such
/// as an unsupported `change_detection` are passed through untouched.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use cs_host::bootstrap::load_config;
///
/// let config = load_config(PathBuf::from("/tmp/clipshelf/config.toml")).unwrap();
/// println!("poll every {} ms", config.poll_interval_ms);
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<ViewerConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ViewerConfig::from_toml(&toml_value)
}

/// Loads `config_path` if it exists; a missing file is `Ok(None)`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use cs_host::bootstrap::load_optional_config;
///
/// let config = load_optional_config(Path::new("/nonexistent/clipshelf.toml")).unwrap();
/// assert!(config.is_none());
/// ```
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_optional_config(config_path: &Path) -> anyhow::Result<Option<ViewerConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }
    load_config(config_path.to_path_buf()).map(Some)
}
