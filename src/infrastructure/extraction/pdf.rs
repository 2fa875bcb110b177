//! PDF text extraction via pdf-extract

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::application::ports::ExtractionError;

/// Extract text from PDF bytes.
///
/// pdf-extract (through its font handling) can panic on malformed
/// fonts/glyphs, so the call is panic-guarded.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => Err(ExtractionError::Pdf(
            "extraction panicked, document likely contains malformed fonts".to_string(),
        )),
    }
}
