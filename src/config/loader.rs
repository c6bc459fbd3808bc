//! Configuration file discovery and loading.
//!
//! A project keeps its configuration at `.mqprobe/config.yml`; `--config`
//! points at any other file. Running without either uses the defaults.

use crate::config::schema::MqprobeConfig;
use crate::error::{ProbeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".mqprobe";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Find the project config at `.mqprobe/config.yml` under `root`.
pub fn find_project_config(root: &Path) -> Option<PathBuf> {
    let path = root.join(CONFIG_DIR).join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into MqprobeConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<MqprobeConfig> {
    let content = fs::read_to_string(path).map_err(|e| ProbeError::config_read(path, e))?;

    parse_config_from(&content, path)
}

/// Parse YAML content into MqprobeConfig.
pub fn parse_config(content: &str) -> Result<MqprobeConfig> {
    parse_config_from(content, Path::new("<inline>"))
}

/// Parse YAML content, reporting errors against `source_path`.
fn parse_config_from(content: &str, source_path: &Path) -> Result<MqprobeConfig> {
    // An empty file is an empty mapping, not an error.
    if content.trim().is_empty() {
        return Ok(MqprobeConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ProbeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project config under `root` is used when present, and the defaults when
/// it is not.
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<MqprobeConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_project_config(root) {
        Some(path) => load_config_file(&path),
        None => Ok(MqprobeConfig::default()),
    }
}
