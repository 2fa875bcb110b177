//! Document rendering adapters

mod docx;

pub use docx::DocxRenderer;
