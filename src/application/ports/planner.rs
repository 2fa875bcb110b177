//! Lesson planner port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::lesson::SystemPrompt;

/// Plan completion errors
#[derive(Debug, Clone, Error)]
pub enum PlannerError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty completion response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for generating a lesson plan from prompts
#[async_trait]
pub trait LessonPlanner: Send + Sync {
    /// Draft a lesson plan.
    ///
    /// # Arguments
    /// * `system_prompt` - The coaching instruction
    /// * `user_prompt` - Form fields plus extracted lesson content
    ///
    /// # Returns
    /// The plan text or an error
    async fn draft_plan(
        &self,
        system_prompt: &SystemPrompt,
        user_prompt: &str,
    ) -> Result<String, PlannerError>;
}
