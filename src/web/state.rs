//! Shared handler state

use std::sync::Arc;

use crate::application::GenerateLessonPlanUseCase;
use crate::infrastructure::{CompositeExtractor, DocxRenderer, OpenAiPlanner};

/// The concrete use case wired into the HTTP surface
pub type PlanUseCase = GenerateLessonPlanUseCase<CompositeExtractor, OpenAiPlanner, DocxRenderer>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<PlanUseCase>,
}

impl AppState {
    /// Wrap a use case for handler sharing
    pub fn new(use_case: PlanUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }
}
