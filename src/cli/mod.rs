//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, user controls,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod controls;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_recorder, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RecordOptions};
