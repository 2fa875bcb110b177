//! Text extraction port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::upload::UploadedFile;

/// Text extraction errors
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("No text could be extracted from the document")]
    EmptyDocument,

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),

    #[error("Failed to read XLSX: {0}")]
    Xlsx(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("I/O error during extraction: {0}")]
    Io(String),
}

/// Port for extracting plain text from an uploaded document
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract text from the uploaded file, dispatching on its kind.
    ///
    /// # Returns
    /// The extracted text (trimmed, non-empty) or an error
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError>;
}
