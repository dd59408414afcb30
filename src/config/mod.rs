//! Configuration loading and merging
//!
//! Pass options come from the command line and an optional config file, with
//! precedence CLI > file > defaults.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
