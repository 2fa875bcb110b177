//! Document text extraction adapters

mod docx;
mod image;
mod pdf;
mod plain;
mod xlsx;

use async_trait::async_trait;
use tokio::task;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::upload::{FileKind, UploadedFile};

pub use image::TesseractOcr;

/// Extractor that dispatches on the uploaded file's kind.
/// CPU-bound format parsing runs on blocking threads.
pub struct CompositeExtractor {
    ocr: TesseractOcr,
}

impl CompositeExtractor {
    /// Create with a default OCR engine
    pub fn new() -> Self {
        Self {
            ocr: TesseractOcr::new(),
        }
    }

    /// Create with a configured OCR engine
    pub fn with_ocr(ocr: TesseractOcr) -> Self {
        Self { ocr }
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let text = match file.kind() {
            FileKind::Pdf => run_blocking(file.data().to_vec(), |data| pdf::extract_text(&data)).await?,
            FileKind::Docx => {
                run_blocking(file.data().to_vec(), |data| docx::extract_text(&data)).await?
            }
            FileKind::Xlsx => {
                run_blocking(file.data().to_vec(), |data| xlsx::extract_text(&data)).await?
            }
            FileKind::Image => self.ocr.extract_text(file.data()).await?,
            FileKind::Text => plain::extract_text(file.data()),
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }
        Ok(text)
    }
}

/// Run a format parser on a blocking thread
async fn run_blocking<F>(data: Vec<u8>, parse: F) -> Result<String, ExtractionError>
where
    F: FnOnce(Vec<u8>) -> Result<String, ExtractionError> + Send + 'static,
{
    task::spawn_blocking(move || parse(data))
        .await
        .map_err(|e| ExtractionError::Io(e.to_string()))?
}
