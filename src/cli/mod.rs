//! Command-line interface for waypoint-utils
//!
//! Loads waypoint files, runs the enabled passes in their fixed order and
//! writes the result.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::input::load_waypoints;
use crate::pipeline::run_pipeline;
use crate::render::write_waypoints;
use crate::utils::describe_output;

mod utils;

use utils::parse_radius;

/// Merge, deduplicate, filter and sort JSON waypoint collections
#[derive(Parser, Debug)]
#[command(name = "waypoint-utils")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input JSON files, each holding an array of waypoints ('-' reads stdin)
    #[arg(long, value_name = "PATH", num_args = 1.., required = true)]
    pub input: Vec<PathBuf>,

    /// Output JSON file, created or truncated ('-' writes to stdout)
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Log every deduplication match (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Drop waypoints that have a later waypoint within this many blocks (0 disables)
    #[arg(long, value_name = "RADIUS", value_parser = parse_radius)]
    pub filter_radius: Option<f64>,

    /// Keep only waypoints inside the box spanned by two corners
    #[arg(
        long,
        num_args = 6,
        value_names = ["X1", "Y1", "Z1", "X2", "Y2", "Z2"],
        allow_negative_numbers = true
    )]
    pub filter_box: Option<Vec<i64>>,

    /// Sort by ascending distance from this point
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub sort_radial: Option<Vec<i64>>,

    /// Sort by waypoint name
    #[arg(long)]
    pub sort_alphanumeric: bool,

    /// Reverse the final order
    #[arg(long)]
    pub invert_sort: bool,

    /// Config file (TOML or YAML) providing defaults for the pass options
    #[arg(short = 'c', long, value_name = "FILE", env = "WAYPOINT_UTILS_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            filter_radius: self.filter_radius,
            filter_box: self.filter_box.clone(),
            sort_radial: self.sort_radial.clone(),
            sort_alphanumeric: self.sort_alphanumeric,
            invert_sort: self.invert_sort,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file_config = load_config(cli.config.as_deref())?;
    let options = merge_cli_with_config(cli.overrides(), file_config)?;

    let waypoints = load_waypoints(&cli.input)?;
    let (waypoints, stats) = run_pipeline(waypoints, &options)?;

    // Output is only touched once every pass has succeeded.
    write_waypoints(&cli.output, &waypoints)?;

    tracing::info!(
        loaded = stats.loaded,
        dropped = stats.dropped(),
        "Wrote {} waypoints to {}",
        stats.output,
        describe_output(&cli.output)
    );
    Ok(())
}

// --verbose forces DEBUG; otherwise RUST_LOG is used as given, falling back
// to INFO when it is unset.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("info")
    };
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init();
}
