//! Filtering passes: radius deduplication and box containment

use crate::domain::Waypoint;

pub mod bbox;
pub mod radius;

pub use bbox::filter_box;
pub use radius::{filter_radius, find_radius_matches, RadiusMatch};

/// Result of a filtering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub waypoints: Vec<Waypoint>,
    /// Pass-specific count: near-duplicate matches for the radius filter,
    /// waypoints inside the box for the box filter.
    pub matches: usize,
}
