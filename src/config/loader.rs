//! Config file loading

use crate::domain::FileConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Table/mapping name under which settings may be nested.
const SECTION: &str = "waypoint-utils";

/// Load settings from `config_path`; no path means no file and all defaults.
///
/// Nothing is ever picked up implicitly from the working directory, so a run
/// without flags or `--config` always passes waypoints through unchanged.
pub fn load_config(config_path: Option<&Path>) -> Result<FileConfig> {
    let Some(config_file) = config_path else {
        return Ok(FileConfig::default());
    };

    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;
    let cfg = parse_config(&content, config_file)?;
    tracing::debug!("Loaded config from {}", config_file.display());
    Ok(cfg)
}

fn parse_config(content: &str, config_file: &Path) -> Result<FileConfig> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(content, config_file),
        "yaml" | "yml" => parse_yaml_config(content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML, accepting either top-level keys or a `[waypoint-utils]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<FileConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML, accepting either top-level keys or a `waypoint-utils` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<FileConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses as null; treat it as "no settings".
    if raw.is_null() {
        return Ok(FileConfig::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}
