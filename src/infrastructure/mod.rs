//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like Tesseract, the OpenAI API, etc.

pub mod config;
pub mod extraction;
pub mod planner;
pub mod render;

// Re-export adapters
pub use config::XdgConfigStore;
pub use extraction::{CompositeExtractor, TesseractOcr};
pub use planner::OpenAiPlanner;
pub use render::DocxRenderer;
