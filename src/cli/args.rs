//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::recording::Duration;

/// Voicedrop - record a voice note and upload it
#[derive(Parser, Debug)]
#[command(name = "voicedrop")]
#[command(version)]
#[command(about = "Record a voice note from the microphone and upload it to a server")]
#[command(long_about = None)]
pub struct Cli {
    /// Upload endpoint URL
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Stop recording automatically after this long (e.g. 90s, 2m); unbounded when unset
    #[arg(long, value_name = "TIME")]
    pub max_duration: Option<String>,

    /// Exit after one record-and-upload cycle
    #[arg(long)]
    pub once: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["endpoint", "max_duration"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Resolved options for the interactive recorder
#[derive(Debug, Clone)]
pub struct RecordOptions {
    /// Upload endpoint URL
    pub endpoint: String,
    /// Optional auto-stop safety limit
    pub max_duration: Option<Duration>,
    /// Exit after one cycle instead of returning to idle
    pub once: bool,
}
