//! Radius-based deduplication
//!
//! Every waypoint is compared against all waypoints that come after it. A
//! waypoint is dropped as soon as one later waypoint lies within the radius,
//! so of a cluster of near-duplicates only the last one (in input order)
//! survives. The scan is a plain O(n²) pass; collections are small.

use crate::domain::{locate_all, Location, Waypoint};
use crate::error::WaypointError;
use crate::filter::FilterOutcome;

/// A waypoint that has a later neighbour within the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusMatch {
    /// Index of the waypoint being dropped.
    pub index: usize,
    /// Index of the first later waypoint within range.
    pub other: usize,
    pub distance: f64,
}

/// Find, for each location, the first later location within `radius`.
///
/// Returns at most one match per index, in index order. The boundary is
/// inclusive.
pub fn find_radius_matches(locations: &[Location], radius: f64) -> Vec<RadiusMatch> {
    let mut matches = Vec::new();
    for (index, location) in locations.iter().enumerate() {
        let first_close = locations
            .iter()
            .enumerate()
            .skip(index + 1)
            .map(|(other, candidate)| (other, location.distance(candidate)))
            .find(|(_, distance)| *distance <= radius);

        if let Some((other, distance)) = first_close {
            matches.push(RadiusMatch { index, other, distance });
        }
    }
    matches
}

/// Drop every waypoint that has a later waypoint within `radius` blocks.
///
/// A radius of zero disables the pass. When no matches are found the input
/// vector is handed back as-is.
pub fn filter_radius(
    waypoints: Vec<Waypoint>,
    radius: f64,
) -> Result<FilterOutcome, WaypointError> {
    if radius <= 0.0 {
        return Ok(FilterOutcome { waypoints, matches: 0 });
    }

    tracing::info!("Filtering waypoints within {:?} blocks of distance", radius);

    let locations = locate_all(&waypoints)?;
    let found = find_radius_matches(&locations, radius);

    for m in &found {
        tracing::debug!(
            "found match: {} -> {} ({:.2} blocks distance)",
            locations[m.index],
            locations[m.other],
            m.distance
        );
    }

    if found.is_empty() {
        return Ok(FilterOutcome { waypoints, matches: 0 });
    }
    tracing::info!("Found {} matches.", found.len());

    let mut dropped = vec![false; waypoints.len()];
    for m in &found {
        dropped[m.index] = true;
    }
    let kept = waypoints
        .into_iter()
        .zip(dropped)
        .filter_map(|(waypoint, drop)| (!drop).then_some(waypoint))
        .collect();

    Ok(FilterOutcome { waypoints: kept, matches: found.len() })
}
