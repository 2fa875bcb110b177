//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod generate;
pub mod ports;

// Re-export use cases
pub use generate::{
    GenerateError, GenerateInput, GenerateLessonPlanUseCase, GenerateOutput, OutputFormat,
    RenderedDocument,
};
