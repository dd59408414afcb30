//! Shared CLI utilities.

use crate::domain::validate_radius;

/// `value_parser` for `--filter-radius`: a finite, non-negative float.
pub fn parse_radius(value: &str) -> Result<f64, String> {
    let radius: f64 =
        value.trim().parse().map_err(|_| format!("'{}' is not a valid number", value))?;
    validate_radius(radius)
}
