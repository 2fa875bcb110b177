//! Document rendering port interface

use thiserror::Error;

use crate::domain::plan::PlanOutline;

/// Document rendering errors
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Nothing to render: plan outline is empty")]
    EmptyOutline,

    #[error("Failed to build document: {0}")]
    BuildFailed(String),
}

/// Port for rendering a plan outline into office-document bytes
pub trait DocumentRenderer: Send + Sync {
    /// Render the outline into a document.
    ///
    /// # Returns
    /// The document bytes or an error
    fn render(&self, outline: &PlanOutline) -> Result<Vec<u8>, RenderError>;

    /// MIME content type of the rendered document
    fn content_type(&self) -> &'static str;

    /// File extension of the rendered document (without dot)
    fn file_extension(&self) -> &'static str;
}
