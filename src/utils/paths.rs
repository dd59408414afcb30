//! Path helpers for the `-` standard stream convention

use std::path::Path;

/// Path that stands for stdin (as an input) or stdout (as the output).
pub const STDIO_PATH: &str = "-";

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Name a source for messages: `<stdin>` for `-`, the path otherwise.
pub fn describe_input(path: &Path) -> String {
    if is_stdio(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Name a destination for messages: `<stdout>` for `-`, the path otherwise.
pub fn describe_output(path: &Path) -> String {
    if is_stdio(path) {
        "<stdout>".to_string()
    } else {
        path.display().to_string()
    }
}
