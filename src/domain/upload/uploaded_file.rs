//! Uploaded file value object

use std::fmt;

/// File kinds the extraction pipeline understands.
/// Unknown extensions fall back to `Text` and are read as lossy UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Docx,
    Xlsx,
    Image,
    Text,
}

impl FileKind {
    /// Detect the kind from a filename's extension (case-insensitive)
    pub fn from_filename(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "xlsx" => Self::Xlsx,
            "png" | "jpg" | "jpeg" => Self::Image,
            _ => Self::Text,
        }
    }

    /// Get the string identifier for this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Image => "image",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value object representing an uploaded document ready for extraction.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

impl UploadedFile {
    /// Create an UploadedFile from a filename and raw bytes
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    /// Get the original filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the raw file data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// File kind detected from the filename extension
    pub fn kind(&self) -> FileKind {
        FileKind::from_filename(&self.filename)
    }

    /// Whether the upload carries no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// File size in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Human-readable file size (e.g., "1.2 MB")
    pub fn human_readable_size(&self) -> String {
        let bytes = self.data.len() as f64;
        if bytes < 1024.0 {
            format!("{} B", self.data.len())
        } else if bytes < 1024.0 * 1024.0 {
            format!("{:.1} KB", bytes / 1024.0)
        } else {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        }
    }
}
