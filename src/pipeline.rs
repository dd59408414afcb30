//! Fixed-order pass orchestration
//!
//! radius dedup -> box filter -> radial sort -> name sort -> invert.
//! The order never depends on how the options were supplied.

use crate::domain::{PipelineOptions, Waypoint};
use crate::error::WaypointError;
use crate::filter::{filter_box, filter_radius};
use crate::order::{invert_order, sort_alphanumeric, sort_radial};

/// Counters collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub loaded: usize,
    /// Near-duplicate matches found by the radius filter.
    pub radius_matches: usize,
    /// Waypoints inside the box, when the box filter ran.
    pub box_matches: Option<usize>,
    pub output: usize,
}

impl PipelineStats {
    pub fn dropped(&self) -> usize {
        self.loaded - self.output
    }
}

/// Run every enabled pass over `waypoints`.
pub fn run_pipeline(
    waypoints: Vec<Waypoint>,
    options: &PipelineOptions,
) -> Result<(Vec<Waypoint>, PipelineStats), WaypointError> {
    let mut stats = PipelineStats { loaded: waypoints.len(), ..Default::default() };
    let mut waypoints = waypoints;

    if options.is_passthrough() {
        tracing::debug!("No passes enabled; writing {} waypoints unchanged", stats.loaded);
    }

    if options.radius_enabled() {
        let outcome = filter_radius(waypoints, options.filter_radius)?;
        stats.radius_matches = outcome.matches;
        waypoints = outcome.waypoints;
    }

    if let Some(bounds) = &options.filter_box {
        let outcome = filter_box(waypoints, bounds)?;
        stats.box_matches = Some(outcome.matches);
        waypoints = outcome.waypoints;
    }

    if let Some(origin) = &options.sort_radial {
        waypoints = sort_radial(waypoints, origin)?;
    }

    if options.sort_alphanumeric {
        waypoints = sort_alphanumeric(waypoints)?;
    }

    if options.invert_sort {
        tracing::info!("Inverting waypoint order");
        waypoints = invert_order(waypoints);
    }

    stats.output = waypoints.len();
    Ok((waypoints, stats))
}

#[cfg(test)]
mod tests {
    use super::{run_pipeline, PipelineStats};
    use crate::domain::{BoundingBox, Location, PipelineOptions, Waypoint};
    use serde_json::json;

    fn wp(name: &str, x: i64, y: i64, z: i64) -> Waypoint {
        serde_json::from_value(json!({"name": name, "location": {"x": x, "y": y, "z": z}}))
            .expect("waypoint")
    }

    fn names(waypoints: &[Waypoint]) -> Vec<&str> {
        waypoints.iter().filter_map(Waypoint::name).collect()
    }

    #[test]
    fn passthrough_returns_input_untouched() {
        let input = vec![wp("b", 5, 0, 0), wp("a", 0, 0, 0)];
        let (out, stats) = run_pipeline(input.clone(), &PipelineOptions::default()).expect("run");
        assert_eq!(out, input);
        assert_eq!(stats, PipelineStats { loaded: 2, output: 2, ..Default::default() });
    }

    #[test]
    fn dedup_runs_before_box_filter() {
        // "edge" sits just outside the box and is the later neighbour of
        // "inside"; dedup drops "inside" before the box ever sees it.
        let input = vec![wp("inside", 2, 0, 0), wp("edge", 3, 0, 0), wp("keep", 0, 0, 0)];
        let options = PipelineOptions {
            filter_radius: 1.0,
            filter_box: BoundingBox::from_coords(&[0, 0, 0, 2, 2, 2]),
            ..Default::default()
        };
        let (out, stats) = run_pipeline(input, &options).expect("run");
        assert_eq!(names(&out), vec!["keep"]);
        assert_eq!(stats.radius_matches, 1);
        assert_eq!(stats.box_matches, Some(1));
        assert_eq!(stats.dropped(), 2);
    }

    #[test]
    fn name_sort_runs_after_radial_sort() {
        let input = vec![wp("b", 1, 0, 0), wp("a", 9, 0, 0), wp("a", 2, 0, 0)];
        let options = PipelineOptions {
            sort_radial: Some(Location::new(0, 0, 0)),
            sort_alphanumeric: true,
            ..Default::default()
        };
        let (out, _) = run_pipeline(input, &options).expect("run");
        let xs: Vec<i64> = out.iter().map(|w| w.location(0).expect("loc").x).collect();
        // Equal names keep the radial order established first.
        assert_eq!(xs, vec![2, 9, 1]);
    }

    #[test]
    fn radial_sort_with_invert_is_descending() {
        let input = vec![wp("mid", 0, 2, 0), wp("near", 1, 0, 0), wp("far", 0, 0, 3)];
        let options = PipelineOptions {
            sort_radial: Some(Location::new(0, 0, 0)),
            invert_sort: true,
            ..Default::default()
        };
        let (out, _) = run_pipeline(input, &options).expect("run");
        assert_eq!(names(&out), vec!["far", "mid", "near"]);
    }

    #[test]
    fn data_error_aborts_run() {
        let nameless: Waypoint =
            serde_json::from_value(json!({"location": {"x": 0, "y": 0, "z": 0}})).expect("wp");
        let options = PipelineOptions { sort_alphanumeric: true, ..Default::default() };
        assert!(run_pipeline(vec![wp("a", 0, 0, 0), nameless], &options).is_err());
    }
}
