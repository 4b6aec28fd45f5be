//! Configuration file discovery, loading, and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::{Path, PathBuf};

/// The configuration file name looked up next to design files.
pub const CONFIG_FILE: &str = "vwave.toml";

/// Walks up from `start` looking for the nearest `vwave.toml`.
///
/// Returns the path of the file, or `None` if no ancestor directory has one.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads the configuration that applies to files in `start`.
///
/// Falls back to defaults when no `vwave.toml` exists in `start` or above it.
pub fn load_config(start: &Path) -> Result<ProjectConfig, ConfigError> {
    match find_config(start) {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!(dir = %start.display(), "no {CONFIG_FILE} found, using defaults");
            Ok(ProjectConfig::default())
        }
    }
}

/// Loads and validates a specific configuration file.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading configuration");
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `vwave.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that tool names are usable and lint overrides do not contradict each other.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    let tools = [
        ("toolchain.compiler", &config.toolchain.compiler),
        ("toolchain.simulator", &config.toolchain.simulator),
        ("toolchain.viewer", &config.toolchain.viewer),
    ];
    for (field, value) in tools {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!("{field} is empty")));
        }
    }
    if let Some(rule) = config
        .lint
        .deny
        .iter()
        .find(|rule| config.lint.allow.contains(rule))
    {
        return Err(ConfigError::ValidationError(format!(
            "lint rule '{rule}' is both allowed and denied"
        )));
    }
    Ok(())
}
