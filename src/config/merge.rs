//! Merge CLI values over config file values

use crate::domain::{validate_radius, BoundingBox, FileConfig, Location, PipelineOptions};
use anyhow::{anyhow, Result};

/// Pass options as given on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub filter_radius: Option<f64>,
    pub filter_box: Option<Vec<i64>>,
    pub sort_radial: Option<Vec<i64>>,
    pub sort_alphanumeric: bool,
    pub invert_sort: bool,
}

/// Resolve the final options. Values from the file are validated the same way
/// the CLI validates its own.
pub fn merge_cli_with_config(cli: CliOverrides, file: FileConfig) -> Result<PipelineOptions> {
    let filter_radius = match cli.filter_radius.or(file.filter_radius) {
        Some(radius) => validate_radius(radius).map_err(|e| anyhow!("filter_radius: {}", e))?,
        None => 0.0,
    };

    let filter_box = cli
        .filter_box
        .or(file.filter_box)
        .map(|coords| {
            BoundingBox::from_coords(&coords).ok_or_else(|| {
                anyhow!("filter_box expects 6 coordinates (x1 y1 z1 x2 y2 z2), got {}", coords.len())
            })
        })
        .transpose()?;

    let sort_radial = cli
        .sort_radial
        .or(file.sort_radial)
        .map(|coords| {
            Location::from_coords(&coords).ok_or_else(|| {
                anyhow!("sort_radial expects 3 coordinates (x y z), got {}", coords.len())
            })
        })
        .transpose()?;

    Ok(PipelineOptions {
        filter_radius,
        filter_box,
        sort_radial,
        sort_alphanumeric: cli.sort_alphanumeric || file.sort_alphanumeric.unwrap_or(false),
        invert_sort: cli.invert_sort || file.invert_sort.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::{BoundingBox, FileConfig, Location, PipelineOptions};

    #[test]
    fn nothing_given_yields_defaults() {
        let options =
            merge_cli_with_config(CliOverrides::default(), FileConfig::default()).expect("merge");
        assert_eq!(options, PipelineOptions::default());
    }

    #[test]
    fn cli_values_win_over_file() {
        let cli = CliOverrides {
            filter_radius: Some(1.0),
            sort_radial: Some(vec![5, 5, 5]),
            ..Default::default()
        };
        let file = FileConfig {
            filter_radius: Some(9.0),
            sort_radial: Some(vec![0, 0, 0]),
            filter_box: Some(vec![0, 0, 0, 1, 1, 1]),
            invert_sort: Some(true),
            ..Default::default()
        };
        let options = merge_cli_with_config(cli, file).expect("merge");
        assert_eq!(options.filter_radius, 1.0);
        assert_eq!(options.sort_radial, Some(Location::new(5, 5, 5)));
        assert_eq!(options.filter_box, BoundingBox::from_coords(&[0, 0, 0, 1, 1, 1]));
        assert!(options.invert_sort);
        assert!(!options.sort_alphanumeric);
    }

    #[test]
    fn file_flag_cannot_be_switched_off_but_cli_can_switch_on() {
        let cli = CliOverrides { sort_alphanumeric: true, ..Default::default() };
        let file = FileConfig { sort_alphanumeric: Some(false), ..Default::default() };
        assert!(merge_cli_with_config(cli, file).expect("merge").sort_alphanumeric);
    }

    #[test]
    fn negative_radius_from_file_is_rejected() {
        let file = FileConfig { filter_radius: Some(-2.0), ..Default::default() };
        let err = merge_cli_with_config(CliOverrides::default(), file).expect_err("negative");
        assert!(err.to_string().contains("filter_radius"));
    }

    #[test]
    fn wrong_coordinate_counts_are_rejected() {
        let file = FileConfig { sort_radial: Some(vec![1, 2]), ..Default::default() };
        assert!(merge_cli_with_config(CliOverrides::default(), file).is_err());

        let cli = CliOverrides { filter_box: Some(vec![0; 12]), ..Default::default() };
        let err = merge_cli_with_config(cli, FileConfig::default()).expect_err("twelve coords");
        assert!(err.to_string().contains("got 12"));
    }
}
