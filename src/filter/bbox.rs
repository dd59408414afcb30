//! Axis-aligned box filter

use crate::domain::{locate_all, BoundingBox, Waypoint};
use crate::error::WaypointError;
use crate::filter::FilterOutcome;

/// Keep only waypoints whose location lies inside `bounds`, in original order.
pub fn filter_box(
    waypoints: Vec<Waypoint>,
    bounds: &BoundingBox,
) -> Result<FilterOutcome, WaypointError> {
    tracing::info!("Filtering waypoints inside box {}", bounds);

    let locations = locate_all(&waypoints)?;
    let kept: Vec<Waypoint> = waypoints
        .into_iter()
        .zip(locations)
        .filter_map(|(waypoint, location)| bounds.contains(&location).then_some(waypoint))
        .collect();

    tracing::info!("Found {} waypoints inside box.", kept.len());
    let matches = kept.len();
    Ok(FilterOutcome { waypoints: kept, matches })
}
