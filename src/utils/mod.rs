//! Shared helpers

pub mod paths;

pub use paths::{describe_input, describe_output, is_stdio};
