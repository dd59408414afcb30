//! waypoint-utils: merge and clean up JSON waypoint collections
//!
//! Waypoints are loaded from one or more JSON arrays, optionally deduplicated
//! by radius, restricted to a box, sorted by distance or name, reversed, and
//! written back out as a single pretty-printed array.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod input;
pub mod order;
pub mod pipeline;
pub mod render;
pub mod utils;

pub use domain::{BoundingBox, Location, PipelineOptions, Waypoint};
pub use error::WaypointError;
pub use pipeline::{run_pipeline, PipelineStats};
