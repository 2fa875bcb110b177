//! Plain-text fallback extraction
//!
//! Unknown extensions are read as lossy UTF-8, matching the service's
//! accept-anything upload contract.

/// Decode bytes as lossy UTF-8
pub fn extract_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}
