//! Data errors raised while reading or transforming waypoints

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaypointError {
    #[error("{source_name}: expected a JSON array of waypoints, found {found}")]
    NotAnArray { source_name: String, found: &'static str },

    #[error("{source_name}: element {index} is {found}, expected a waypoint object")]
    NotAnObject { source_name: String, index: usize, found: &'static str },

    #[error("waypoint {waypoint} is missing field '{field}'")]
    MissingField { waypoint: String, field: &'static str },

    #[error("waypoint {waypoint} has {found} for '{field}': {value}")]
    InvalidField { waypoint: String, field: &'static str, found: &'static str, value: String },
}

/// Short description of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        // Number text is kept verbatim, so integers wider than 64 bits still
        // count as integers here.
        Value::Number(n) if !n.to_string().contains(['.', 'e', 'E']) => "an integer",
        Value::Number(_) => "a non-integer number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
