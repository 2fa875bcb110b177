//! Lesson details value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidRatingError;

/// All available target ratings
pub const ALL_RATINGS: &[TargetRating] = &[TargetRating::Good, TargetRating::Outstanding];

/// Observation readiness level the teacher is preparing for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetRating {
    #[default]
    Good,
    Outstanding,
}

impl TargetRating {
    /// Get the human-readable label for this rating
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Outstanding => "Outstanding",
        }
    }

    /// Get the string identifier for this rating
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Outstanding => "outstanding",
        }
    }
}

impl FromStr for TargetRating {
    type Err = InvalidRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "outstanding" => Ok(Self::Outstanding),
            _ => Err(InvalidRatingError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TargetRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Teacher-provided lesson inputs from the upload form.
/// Absent fields default to "N/A" so the prompt always carries every slot.
#[derive(Debug, Clone)]
pub struct LessonDetails {
    pub teacher_name: String,
    pub lesson_number: String,
    pub lesson_duration: String,
    pub learner_profile: String,
    pub anticipated_problems: String,
    pub target_rating: TargetRating,
}

impl Default for LessonDetails {
    fn default() -> Self {
        Self {
            teacher_name: "N/A".to_string(),
            lesson_number: "N/A".to_string(),
            lesson_duration: "N/A".to_string(),
            learner_profile: "N/A".to_string(),
            anticipated_problems: "N/A".to_string(),
            target_rating: TargetRating::default(),
        }
    }
}

impl LessonDetails {
    /// Build the user prompt combining form fields, timestamp, and the
    /// text extracted from the uploaded material.
    pub fn user_prompt(&self, lesson_content: &str, timestamp: &str) -> String {
        format!(
            "Teacher Name: {}\n\
             Lesson Number: {}\n\
             Lesson Duration: {}\n\
             Learner Profile: {}\n\
             Anticipated Problems: {}\n\
             Target Rating: {}\n\
             Timestamp: {}\n\
             \n\
             Extracted Lesson Content:\n\
             {}",
            self.teacher_name,
            self.lesson_number,
            self.lesson_duration,
            self.learner_profile,
            self.anticipated_problems,
            self.target_rating,
            timestamp,
            lesson_content,
        )
    }
}
