//! LessonCoach server entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lesson_coach::cli::{
    app::{load_merged_config, run_server, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use lesson_coach::domain::config::AppConfig;
use lesson_coach::domain::error::ConfigError;
use lesson_coach::infrastructure::XdgConfigStore;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                let code = match e {
                    ConfigError::ValidationError { .. } => EXIT_USAGE_ERROR,
                    _ => EXIT_ERROR,
                };
                return ExitCode::from(code);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    init_tracing();

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        base_url: cli.base_url.clone(),
        host: cli.host.clone(),
        port: cli.port,
        max_upload_mb: cli.max_upload_mb,
        ocr: None,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    run_server(config).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lesson_coach=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
