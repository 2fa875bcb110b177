//! Image OCR via the Tesseract CLI
//!
//! Writes the upload to a temp file and shells out to
//! `tesseract <file> stdout -l <lang>`. Requires the `tesseract` binary on
//! PATH (or a configured path); degrades with a clear error when absent.

use std::io::Write;

use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::ExtractionError;

/// Tesseract CLI OCR engine
pub struct TesseractOcr {
    binary_path: String,
    language: String,
}

impl TesseractOcr {
    /// Create with the default binary name and language
    pub fn new() -> Self {
        Self {
            binary_path: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }

    /// Create with a configured binary path and language
    pub fn with_settings(binary_path: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
            language: language.into(),
        }
    }

    /// Run OCR over image bytes
    pub async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractionError> {
        let mut tmp = NamedTempFile::new().map_err(|e| ExtractionError::Io(e.to_string()))?;
        tmp.write_all(data)
            .map_err(|e| ExtractionError::Io(e.to_string()))?;
        tmp.flush().map_err(|e| ExtractionError::Io(e.to_string()))?;

        debug!(path = %tmp.path().display(), lang = %self.language, "running tesseract");

        let output = Command::new(&self.binary_path)
            .arg(tmp.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractionError::OcrUnavailable(format!(
                        "tesseract binary not found at '{}'",
                        self.binary_path
                    ))
                } else {
                    ExtractionError::Ocr(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}
