//! CLI layer - Command-line interface
//!
//! Contains argument parsing, the toast countdown, and the main
//! application runner.

pub mod app;
pub mod args;
pub mod countdown;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
