//! Output rendering

pub mod json;

pub use json::{render_json, write_waypoints};
