//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::OcrConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "model" => config.model = Some(value.to_string()),
        "base_url" => config.base_url = Some(value.to_string()),
        "host" => config.host = Some(value.to_string()),
        "port" => {
            config.port = Some(value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a port number (0-65535)".to_string(),
            })?)
        }
        "max_upload_mb" => {
            config.max_upload_mb =
                Some(value.parse().map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a whole number of megabytes".to_string(),
                })?)
        }
        "ocr.language" => {
            let ocr = config.ocr.get_or_insert_with(OcrConfig::default);
            ocr.language = Some(value.to_string());
        }
        "ocr.tesseract_path" => {
            let ocr = config.ocr.get_or_insert_with(OcrConfig::default);
            ocr.tesseract_path = Some(value.to_string());
        }
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;
    let value = lookup(&config, key);

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.info(&format!("{} is not set", key)),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let display = if *key == "api_key" {
            // Never echo credentials
            lookup(&config, key).map(|_| "<set>".to_string())
        } else {
            lookup(&config, key)
        };
        match display {
            Some(v) => presenter.output(&format!("{} = {}", key, v)),
            None => presenter.output(&format!("{} = (not set)", key)),
        }
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn lookup(config: &crate::domain::config::AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.clone(),
        "model" => config.model.clone(),
        "base_url" => config.base_url.clone(),
        "host" => config.host.clone(),
        "port" => config.port.map(|p| p.to_string()),
        "max_upload_mb" => config.max_upload_mb.map(|m| m.to_string()),
        "ocr.language" => config.ocr.as_ref().and_then(|o| o.language.clone()),
        "ocr.tesseract_path" => config.ocr.as_ref().and_then(|o| o.tesseract_path.clone()),
        _ => None,
    }
}
