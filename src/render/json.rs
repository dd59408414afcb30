//! Pretty-printed JSON output

use crate::domain::Waypoint;
use crate::utils::is_stdio;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render waypoints as a JSON array with two-space indentation.
pub fn render_json(waypoints: &[Waypoint]) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(waypoints)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the rendered array to `dest`, replacing any existing content.
/// `-` writes to standard output.
pub fn write_waypoints(dest: &Path, waypoints: &[Waypoint]) -> Result<()> {
    let rendered = render_json(waypoints)?;

    if is_stdio(dest) {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed writing waypoints to standard output")?;
        return Ok(());
    }

    fs::write(dest, rendered)
        .with_context(|| format!("Failed writing output file: {}", dest.display()))
}
