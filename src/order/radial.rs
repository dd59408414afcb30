//! Distance-based ordering

use crate::domain::{locate_all, Location, Waypoint};
use crate::error::WaypointError;

/// Sort ascending by Euclidean distance from `origin`.
pub fn sort_radial(
    waypoints: Vec<Waypoint>,
    origin: &Location,
) -> Result<Vec<Waypoint>, WaypointError> {
    tracing::info!("Sorting waypoints by distance from {}", origin);

    let locations = locate_all(&waypoints)?;
    let mut keyed: Vec<(f64, Waypoint)> = locations
        .iter()
        .map(|location| origin.distance(location))
        .zip(waypoints)
        .collect();

    // `sort_by` is stable, so equidistant waypoints keep their order.
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, waypoint)| waypoint).collect())
}
