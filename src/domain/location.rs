//! Integer positions and the distance/containment math built on them

use serde::{Deserialize, Serialize};
use std::fmt;

/// An `(x, y, z)` block position extracted from a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Location {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Build a location from exactly three coordinates.
    pub fn from_coords(values: &[i64]) -> Option<Self> {
        match values {
            [x, y, z] => Some(Self::new(*x, *y, *z)),
            _ => None,
        }
    }

    /// Euclidean distance in blocks.
    ///
    /// Differences are taken in `f64` so that coordinates near the `i64` limits
    /// cannot overflow.
    pub fn distance(&self, other: &Location) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        let dz = other.z as f64 - self.z as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Axis-aligned box spanned by two arbitrary corners.
///
/// The corners do not need to be ordered: containment is checked against the
/// min/max of each axis independently, boundaries included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub first: Location,
    pub second: Location,
}

impl BoundingBox {
    pub const fn new(first: Location, second: Location) -> Self {
        Self { first, second }
    }

    /// Build a box from `x1 y1 z1 x2 y2 z2`.
    pub fn from_coords(values: &[i64]) -> Option<Self> {
        match values {
            [x1, y1, z1, x2, y2, z2] => {
                Some(Self::new(Location::new(*x1, *y1, *z1), Location::new(*x2, *y2, *z2)))
            }
            _ => None,
        }
    }

    pub fn contains(&self, location: &Location) -> bool {
        between(location.x, self.first.x, self.second.x)
            && between(location.y, self.first.y, self.second.y)
            && between(location.z, self.first.z, self.second.z)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.first, self.second)
    }
}

fn between(value: i64, a: i64, b: i64) -> bool {
    a.min(b) <= value && value <= a.max(b)
}
