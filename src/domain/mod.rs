//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod lesson;
pub mod plan;
pub mod upload;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use lesson::{LessonDetails, SystemPrompt, TargetRating};
pub use plan::{HeadingLevel, PlanBlock, PlanOutline, PlanTable};
pub use upload::{FileKind, UploadedFile};
