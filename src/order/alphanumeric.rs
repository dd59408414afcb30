//! Name-based ordering

use crate::domain::Waypoint;
use crate::error::WaypointError;

/// Sort ascending by `name`, comparing strings by Unicode code point.
///
/// Every waypoint must carry a string `name`; the first one that doesn't is
/// reported and nothing is reordered.
pub fn sort_alphanumeric(waypoints: Vec<Waypoint>) -> Result<Vec<Waypoint>, WaypointError> {
    tracing::info!("Sorting waypoints by name");

    let mut keyed: Vec<(String, Waypoint)> = Vec::with_capacity(waypoints.len());
    for (index, waypoint) in waypoints.into_iter().enumerate() {
        let name = waypoint.sort_name(index)?.to_string();
        keyed.push((name, waypoint));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, waypoint)| waypoint).collect())
}
