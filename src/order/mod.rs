//! Reordering passes
//!
//! Sorts are stable: waypoints with equal keys keep their prior relative order.

use crate::domain::Waypoint;

pub mod alphanumeric;
pub mod radial;

pub use alphanumeric::sort_alphanumeric;
pub use radial::sort_radial;

/// Reverse the current order.
pub fn invert_order(mut waypoints: Vec<Waypoint>) -> Vec<Waypoint> {
    waypoints.reverse();
    waypoints
}
