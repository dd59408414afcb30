//! Core data types shared by every pass
//!
//! Waypoints are kept as raw JSON objects so that unknown fields survive a run
//! untouched; `Location` and `BoundingBox` are derived views used only for math.

pub mod location;
pub mod options;
pub mod waypoint;

pub use location::{BoundingBox, Location};
pub use options::{validate_radius, FileConfig, PipelineOptions};
pub use waypoint::{locate_all, Waypoint};
