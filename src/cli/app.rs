//! Main app runner for server mode

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::XdgConfigStore;
use crate::web;

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the HTTP server with the merged configuration
pub async fn run_server(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    // Load API key from config or environment
    let api_key = match get_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match web::serve(&config, api_key).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&format!("Server error: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Get API key from environment or merged config
pub fn get_api_key(config: &AppConfig) -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    config.api_key.clone().ok_or_else(|| {
        "Missing API key. Set OPENAI_API_KEY environment variable or run 'lesson-coach config set api_key <key>'".to_string()
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("OPENAI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
