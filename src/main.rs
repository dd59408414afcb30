//! waypoint-utils: merge, deduplicate, filter and sort JSON waypoint collections

use anyhow::Result;

fn main() -> Result<()> {
    waypoint_utils::cli::run()
}
