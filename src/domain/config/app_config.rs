//! Application configuration value object

use serde::{Deserialize, Serialize};

/// OCR-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrConfig {
    pub language: Option<String>,
    pub tesseract_path: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_upload_mb: Option<u64>,
    pub ocr: Option<OcrConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some("gpt-4o-mini".to_string()),
            base_url: Some("https://api.openai.com/v1".to_string()),
            host: Some("0.0.0.0".to_string()),
            port: Some(5000),
            max_upload_mb: Some(16),
            ocr: Some(OcrConfig {
                language: Some("eng".to_string()),
                tesseract_path: Some("tesseract".to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            base_url: other.base_url.or(self.base_url),
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            max_upload_mb: other.max_upload_mb.or(self.max_upload_mb),
            ocr: Self::merge_ocr_config(self.ocr, other.ocr),
        }
    }

    /// Merge OCR config sections
    fn merge_ocr_config(base: Option<OcrConfig>, other: Option<OcrConfig>) -> Option<OcrConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(OcrConfig {
                language: o.language.or(b.language),
                tesseract_path: o.tesseract_path.or(b.tesseract_path),
            }),
        }
    }

    /// Get model name, or "gpt-4o-mini" if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or("gpt-4o-mini")
    }

    /// Get completion endpoint base URL, or the OpenAI default if not set
    pub fn base_url_or_default(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or("https://api.openai.com/v1")
    }

    /// Get bind host, or "0.0.0.0" if not set
    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or("0.0.0.0")
    }

    /// Get bind port, or 5000 if not set
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(5000)
    }

    /// Get upload limit in bytes, or 16 MiB if not set
    pub fn max_upload_bytes(&self) -> usize {
        (self.max_upload_mb.unwrap_or(16) as usize) * 1024 * 1024
    }

    /// Get OCR language, or "eng" if not set
    pub fn ocr_language_or_default(&self) -> &str {
        self.ocr
            .as_ref()
            .and_then(|o| o.language.as_deref())
            .unwrap_or("eng")
    }

    /// Get tesseract binary path, or "tesseract" if not set
    pub fn tesseract_path_or_default(&self) -> &str {
        self.ocr
            .as_ref()
            .and_then(|o| o.tesseract_path.as_deref())
            .unwrap_or("tesseract")
    }
}
