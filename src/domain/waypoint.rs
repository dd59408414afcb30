//! Waypoint records

use crate::domain::Location;
use crate::error::{json_kind, WaypointError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A waypoint as read from disk.
///
/// The full JSON object is held verbatim (field order included) and written
/// back out unchanged; passes only ever read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Waypoint(Map<String, Value>);

impl Waypoint {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The `name` field, when present and a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Extract `location.{x,y,z}`.
    ///
    /// `index` is the waypoint's position in the current collection and is only
    /// used to describe it in errors.
    pub fn location(&self, index: usize) -> Result<Location, WaypointError> {
        let location = self.0.get("location").ok_or_else(|| self.missing(index, "location"))?;
        let Some(object) = location.as_object() else {
            return Err(self.invalid(index, "location", location));
        };

        let coord = |key: &str, field: &'static str| -> Result<i64, WaypointError> {
            let value = object.get(key).ok_or_else(|| self.missing(index, field))?;
            value.as_i64().ok_or_else(|| self.invalid(index, field, value))
        };

        Ok(Location::new(
            coord("x", "location.x")?,
            coord("y", "location.y")?,
            coord("z", "location.z")?,
        ))
    }

    /// The `name` field as a sort key; absent or non-string names are errors.
    pub fn sort_name(&self, index: usize) -> Result<&str, WaypointError> {
        let value = self.0.get("name").ok_or_else(|| self.missing(index, "name"))?;
        value.as_str().ok_or_else(|| self.invalid(index, "name", value))
    }

    /// Human-readable handle for diagnostics, e.g. `#3 ("Spawn")`.
    pub fn label(&self, index: usize) -> String {
        match self.name() {
            Some(name) => format!("#{index} ({name:?})"),
            None => format!("#{index}"),
        }
    }

    fn missing(&self, index: usize, field: &'static str) -> WaypointError {
        WaypointError::MissingField { waypoint: self.label(index), field }
    }

    fn invalid(&self, index: usize, field: &'static str, value: &Value) -> WaypointError {
        WaypointError::InvalidField {
            waypoint: self.label(index),
            field,
            found: json_kind(value),
            value: value.to_string(),
        }
    }
}

/// Resolve every waypoint's location up front, failing on the first bad one.
pub fn locate_all(waypoints: &[Waypoint]) -> Result<Vec<Location>, WaypointError> {
    waypoints.iter().enumerate().map(|(index, waypoint)| waypoint.location(index)).collect()
}

#[cfg(test)]
mod tests {
    use super::{locate_all, Waypoint};
    use crate::domain::Location;
    use crate::error::WaypointError;
    use serde_json::json;

    fn waypoint(value: serde_json::Value) -> Waypoint {
        serde_json::from_value(value).expect("waypoint object")
    }

    #[test]
    fn location_reads_integer_triple() {
        let wp = waypoint(json!({"name": "A", "location": {"x": 1, "y": -64, "z": 300}}));
        assert_eq!(wp.location(0).expect("location"), Location::new(1, -64, 300));
    }

    #[test]
    fn location_missing_axis_names_the_field() {
        let wp = waypoint(json!({"name": "Spawn", "location": {"x": 1, "z": 3}}));
        let err = wp.location(4).expect_err("missing y");
        assert!(matches!(err, WaypointError::MissingField { field: "location.y", .. }));
        assert_eq!(err.to_string(), "waypoint #4 (\"Spawn\") is missing field 'location.y'");
    }

    #[test]
    fn location_rejects_fractional_coordinates() {
        let wp = waypoint(json!({"location": {"x": 1.5, "y": 0, "z": 0}}));
        let err = wp.location(0).expect_err("fractional x");
        assert!(matches!(err, WaypointError::InvalidField { field: "location.x", .. }));
    }

    #[test]
    fn location_must_be_object() {
        let wp = waypoint(json!({"location": [1, 2, 3]}));
        assert!(matches!(
            wp.location(0),
            Err(WaypointError::InvalidField { field: "location", .. })
        ));
        let wp = waypoint(json!({"name": "no location"}));
        assert!(matches!(
            wp.location(0),
            Err(WaypointError::MissingField { field: "location", .. })
        ));
    }

    #[test]
    fn sort_name_requires_string() {
        assert_eq!(waypoint(json!({"name": "B"})).sort_name(0).expect("name"), "B");
        assert!(matches!(
            waypoint(json!({"label": "B"})).sort_name(0),
            Err(WaypointError::MissingField { field: "name", .. })
        ));
        assert!(matches!(
            waypoint(json!({"name": 7})).sort_name(0),
            Err(WaypointError::InvalidField { field: "name", .. })
        ));
    }

    #[test]
    fn serialization_keeps_unknown_fields_in_order() {
        let raw = r#"{"zeta":1,"name":"A","location":{"x":0,"y":0,"z":0},"alpha":[true]}"#;
        let wp: Waypoint = serde_json::from_str(raw).expect("parse");
        assert_eq!(serde_json::to_string(&wp).expect("serialize"), raw);
    }

    #[test]
    fn serialization_keeps_number_text_exact() {
        let raw = r#"{"name":"A","id":123456789012345678901234567890,"scale":1.0,"ratio":0.10000000000000000001}"#;
        let wp: Waypoint = serde_json::from_str(raw).expect("parse");
        assert_eq!(serde_json::to_string(&wp).expect("serialize"), raw);
    }

    #[test]
    fn oversized_coordinate_is_an_invalid_integer() {
        let wp: Waypoint = serde_json::from_str(
            r#"{"location":{"x":123456789012345678901234567890,"y":0,"z":0}}"#,
        )
        .expect("parse");
        let err = wp.location(0).expect_err("does not fit i64");
        assert!(matches!(
            err,
            WaypointError::InvalidField { field: "location.x", found: "an integer", .. }
        ));
    }

    #[test]
    fn locate_all_reports_first_failing_index() {
        let waypoints = vec![
            waypoint(json!({"location": {"x": 0, "y": 0, "z": 0}})),
            waypoint(json!({"name": "broken"})),
        ];
        let err = locate_all(&waypoints).expect_err("second waypoint has no location");
        assert!(err.to_string().contains("#1 (\"broken\")"));
    }
}
