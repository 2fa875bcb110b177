//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod extractor;
pub mod planner;
pub mod renderer;

// Re-export common types
pub use config::ConfigStore;
pub use extractor::{ExtractionError, TextExtractor};
pub use planner::{LessonPlanner, PlannerError};
pub use renderer::{DocumentRenderer, RenderError};
