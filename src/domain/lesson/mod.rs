//! Lesson domain module

mod details;
mod system_prompt;

pub use details::{LessonDetails, TargetRating, ALL_RATINGS};
pub use system_prompt::SystemPrompt;
