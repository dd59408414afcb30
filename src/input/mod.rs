//! Waypoint loading
//!
//! Each source holds one JSON array of waypoint objects. Sources are read in
//! the order given and concatenated.

use crate::domain::Waypoint;
use crate::error::{json_kind, WaypointError};
use crate::utils::{describe_input, is_stdio};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Load and concatenate every source, preserving file and element order.
pub fn load_waypoints(sources: &[PathBuf]) -> Result<Vec<Waypoint>> {
    let mut waypoints = Vec::new();
    for source in sources {
        let loaded = load_source(source)?;
        tracing::debug!("Loaded {} waypoints from {}", loaded.len(), describe_input(source));
        waypoints.extend(loaded);
    }
    Ok(waypoints)
}

/// Load one source; `-` reads standard input.
pub fn load_source(path: &Path) -> Result<Vec<Waypoint>> {
    let content = read_source(path)?;
    parse_waypoints(&content, &describe_input(path))
}

fn read_source(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed reading waypoints from standard input")?;
        return Ok(content);
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed reading input file: {}", path.display()))
}

/// Parse a JSON document that must be an array of objects.
pub fn parse_waypoints(content: &str, source_name: &str) -> Result<Vec<Waypoint>> {
    let document: Value = serde_json::from_str(content)
        .with_context(|| format!("Invalid JSON in {}", source_name))?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(WaypointError::NotAnArray {
                source_name: source_name.to_string(),
                found: json_kind(&other),
            }
            .into())
        }
    };

    let mut waypoints = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(fields) => waypoints.push(Waypoint::new(fields)),
            other => {
                return Err(WaypointError::NotAnObject {
                    source_name: source_name.to_string(),
                    index,
                    found: json_kind(&other),
                }
                .into())
            }
        }
    }
    Ok(waypoints)
}
