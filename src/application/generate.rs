//! Generate lesson plan use case

use std::str::FromStr;

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::error::InvalidFormatError;
use crate::domain::lesson::{LessonDetails, SystemPrompt};
use crate::domain::plan::PlanOutline;
use crate::domain::upload::UploadedFile;

use super::ports::{
    DocumentRenderer, ExtractionError, LessonPlanner, PlannerError, RenderError, TextExtractor,
};

/// Errors from the generate use case
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Uploaded file is empty")]
    EmptyUpload,

    #[error("Could not extract text: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Plan generation failed: {0}")]
    Planner(#[from] PlannerError),

    #[error("Document rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Response shape requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Docx,
}

impl FromStr for OutputFormat {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "docx" => Ok(Self::Docx),
            _ => Err(InvalidFormatError {
                input: s.to_string(),
            }),
        }
    }
}

/// Input parameters for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateInput {
    /// Uploaded lesson material
    pub file: UploadedFile,
    /// Teacher-provided form fields
    pub details: LessonDetails,
    /// Requested response shape
    pub format: OutputFormat,
}

/// A rendered document ready for download
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

/// Output from the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    /// The generated plan text
    pub plan_text: String,
    /// Rendered document (present when `OutputFormat::Docx` was requested)
    pub document: Option<RenderedDocument>,
}

/// One-shot plan generation use case
pub struct GenerateLessonPlanUseCase<E, P, R>
where
    E: TextExtractor,
    P: LessonPlanner,
    R: DocumentRenderer,
{
    extractor: E,
    planner: P,
    renderer: R,
}

impl<E, P, R> GenerateLessonPlanUseCase<E, P, R>
where
    E: TextExtractor,
    P: LessonPlanner,
    R: DocumentRenderer,
{
    /// Create a new use case instance
    pub fn new(extractor: E, planner: P, renderer: R) -> Self {
        Self {
            extractor,
            planner,
            renderer,
        }
    }

    /// Execute the generation workflow
    pub async fn execute(&self, input: GenerateInput) -> Result<GenerateOutput, GenerateError> {
        if input.file.is_empty() {
            return Err(GenerateError::EmptyUpload);
        }

        info!(
            filename = input.file.filename(),
            kind = %input.file.kind(),
            size = %input.file.human_readable_size(),
            "extracting uploaded document"
        );

        let lesson_content = self.extractor.extract(&input.file).await?;
        if lesson_content.trim().is_empty() {
            return Err(GenerateError::Extraction(ExtractionError::EmptyDocument));
        }
        debug!(chars = lesson_content.len(), "extraction complete");

        let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let system_prompt = SystemPrompt::build(input.details.target_rating);
        let user_prompt = input.details.user_prompt(&lesson_content, &timestamp);

        let plan_text = self.planner.draft_plan(&system_prompt, &user_prompt).await?;
        info!(chars = plan_text.len(), "plan generated");

        let document = match input.format {
            OutputFormat::Json => None,
            OutputFormat::Docx => {
                let outline = PlanOutline::parse(&plan_text);
                let bytes = self.renderer.render(&outline)?;
                Some(RenderedDocument {
                    bytes,
                    filename: download_filename(
                        &input.details,
                        self.renderer.file_extension(),
                        &Local::now().format("%Y%m%d_%H%M").to_string(),
                    ),
                    content_type: self.renderer.content_type(),
                })
            }
        };

        Ok(GenerateOutput {
            plan_text,
            document,
        })
    }
}

/// Build a safe attachment filename from the teacher name and a timestamp
fn download_filename(details: &LessonDetails, extension: &str, stamp: &str) -> String {
    let slug: String = details
        .teacher_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let slug = slug.trim_matches('_').to_string();

    if slug.is_empty() || slug == "n_a" {
        format!("lesson_plan_{}.{}", stamp, extension)
    } else {
        format!("lesson_plan_{}_{}.{}", slug, stamp, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{RenderError, TextExtractor};
    use async_trait::async_trait;

    // Mock implementations for testing
    struct MockExtractor;

    #[async_trait]
    impl TextExtractor for MockExtractor {
        async fn extract(&self, _file: &UploadedFile) -> Result<String, ExtractionError> {
            Ok("Unit 4: Past Simple".to_string())
        }
    }

    struct EmptyExtractor;

    #[async_trait]
    impl TextExtractor for EmptyExtractor {
        async fn extract(&self, _file: &UploadedFile) -> Result<String, ExtractionError> {
            Ok("   ".to_string())
        }
    }

    struct MockPlanner;

    #[async_trait]
    impl LessonPlanner for MockPlanner {
        async fn draft_plan(
            &self,
            _system_prompt: &SystemPrompt,
            user_prompt: &str,
        ) -> Result<String, PlannerError> {
            assert!(user_prompt.contains("Extracted Lesson Content"));
            Ok("## SECTION 1\n- objective one".to_string())
        }
    }

    struct MockRenderer;

    impl DocumentRenderer for MockRenderer {
        fn render(&self, outline: &PlanOutline) -> Result<Vec<u8>, RenderError> {
            assert!(!outline.is_empty());
            Ok(vec![0x50, 0x4b])
        }

        fn content_type(&self) -> &'static str {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }

        fn file_extension(&self) -> &'static str {
            "docx"
        }
    }

    fn use_case() -> GenerateLessonPlanUseCase<MockExtractor, MockPlanner, MockRenderer> {
        GenerateLessonPlanUseCase::new(MockExtractor, MockPlanner, MockRenderer)
    }

    fn input(format: OutputFormat) -> GenerateInput {
        GenerateInput {
            file: UploadedFile::new("unit4.txt", b"content".to_vec()),
            details: LessonDetails::default(),
            format,
        }
    }

    #[tokio::test]
    async fn execute_returns_plan_text() {
        let output = use_case().execute(input(OutputFormat::Json)).await.unwrap();
        assert!(output.plan_text.contains("SECTION 1"));
        assert!(output.document.is_none());
    }

    #[tokio::test]
    async fn execute_docx_renders_document() {
        let output = use_case().execute(input(OutputFormat::Docx)).await.unwrap();
        let doc = output.document.unwrap();
        assert_eq!(doc.bytes, vec![0x50, 0x4b]);
        assert!(doc.filename.starts_with("lesson_plan_"));
        assert!(doc.filename.ends_with(".docx"));
        assert!(doc.content_type.contains("wordprocessingml"));
    }

    #[tokio::test]
    async fn execute_rejects_empty_upload() {
        let empty = GenerateInput {
            file: UploadedFile::new("unit4.txt", Vec::new()),
            details: LessonDetails::default(),
            format: OutputFormat::Json,
        };
        let err = use_case().execute(empty).await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyUpload));
    }

    #[tokio::test]
    async fn execute_rejects_blank_extraction() {
        let use_case = GenerateLessonPlanUseCase::new(EmptyExtractor, MockPlanner, MockRenderer);
        let err = use_case.execute(input(OutputFormat::Json)).await.unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Extraction(ExtractionError::EmptyDocument)
        ));
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("DOCX".parse::<OutputFormat>().unwrap(), OutputFormat::Docx);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn download_filename_slugs_teacher_name() {
        let details = LessonDetails {
            teacher_name: "Sara Ali".to_string(),
            ..Default::default()
        };
        let name = download_filename(&details, "docx", "20260831_1000");
        assert_eq!(name, "lesson_plan_sara_ali_20260831_1000.docx");
    }

    #[test]
    fn download_filename_skips_placeholder_name() {
        let details = LessonDetails::default();
        let name = download_filename(&details, "docx", "20260831_1000");
        assert_eq!(name, "lesson_plan_20260831_1000.docx");
    }
}
