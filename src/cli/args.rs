//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// LessonCoach - AI lesson plan generator web service
#[derive(Parser, Debug)]
#[command(name = "lesson-coach")]
#[command(version)]
#[command(about = "AI lesson plan generator and observation readiness coach web service")]
#[command(long_about = None)]
pub struct Cli {
    /// Bind host for the HTTP server
    #[arg(short = 'H', long, value_name = "HOST")]
    pub host: Option<String>,

    /// Bind port for the HTTP server
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Chat model to request
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Completion endpoint base URL (OpenAI-compatible)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Maximum upload size in megabytes
    #[arg(long, value_name = "MB")]
    pub max_upload_mb: Option<u64>,

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
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "base_url",
    "host",
    "port",
    "max_upload_mb",
    "ocr.language",
    "ocr.tesseract_path",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
