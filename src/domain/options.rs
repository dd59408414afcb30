//! Pass configuration

use crate::domain::{BoundingBox, Location};
use serde::Deserialize;

/// Resolved settings for one pipeline run.
///
/// Built once from CLI arguments and the optional config file, then handed to
/// every pass by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOptions {
    /// Deduplication radius in blocks; `0.0` disables the pass.
    pub filter_radius: f64,
    pub filter_box: Option<BoundingBox>,
    pub sort_radial: Option<Location>,
    pub sort_alphanumeric: bool,
    pub invert_sort: bool,
}

impl PipelineOptions {
    pub fn radius_enabled(&self) -> bool {
        self.filter_radius > 0.0
    }

    /// True when no pass would touch the collection.
    pub fn is_passthrough(&self) -> bool {
        !self.radius_enabled()
            && self.filter_box.is_none()
            && self.sort_radial.is_none()
            && !self.sort_alphanumeric
            && !self.invert_sort
    }
}

/// Settings as they appear in a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    #[serde(alias = "filter-radius")]
    pub filter_radius: Option<f64>,
    #[serde(alias = "filter-box")]
    pub filter_box: Option<Vec<i64>>,
    #[serde(alias = "sort-radial")]
    pub sort_radial: Option<Vec<i64>>,
    #[serde(alias = "sort-alphanumeric")]
    pub sort_alphanumeric: Option<bool>,
    #[serde(alias = "invert-sort")]
    pub invert_sort: Option<bool>,
}

/// Accept a deduplication radius: finite and not negative.
pub fn validate_radius(radius: f64) -> Result<f64, String> {
    if !radius.is_finite() {
        return Err(format!("radius must be a finite number, got {radius}"));
    }
    if radius < 0.0 {
        return Err(format!("radius must not be negative, got {radius}"));
    }
    Ok(radius)
}
