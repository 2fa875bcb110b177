//! HTTP request handlers

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::info;

use crate::application::{GenerateInput, OutputFormat};
use crate::domain::lesson::LessonDetails;
use crate::domain::upload::UploadedFile;

use super::error::ApiError;
use super::state::AppState;

/// Service banner
pub async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "message": "AI Lesson Planner (Observation Readiness Coach) is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Generate a lesson plan from an uploaded document plus form fields
pub async fn generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut file: Option<UploadedFile> = None;
    let mut details = LessonDetails::default();
    let mut format = OutputFormat::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;
            file = Some(UploadedFile::new(filename, data.to_vec()));
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read field '{}': {}", name, e)))?;
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }

        match name.as_str() {
            "teacher_name" => details.teacher_name = value,
            "lesson_number" => details.lesson_number = value,
            "lesson_duration" => details.lesson_duration = value,
            "learner_profile" => details.learner_profile = value,
            "anticipated_problems" => details.anticipated_problems = value,
            "target_rating" => {
                details.target_rating = value
                    .parse()
                    .map_err(|e: crate::domain::error::InvalidRatingError| {
                        ApiError::bad_request(e.to_string())
                    })?
            }
            "format" => {
                format = value
                    .parse()
                    .map_err(|e: crate::domain::error::InvalidFormatError| {
                        ApiError::bad_request(e.to_string())
                    })?
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    let output = state
        .use_case
        .execute(GenerateInput {
            file,
            details,
            format,
        })
        .await?;

    match output.document {
        None => Ok(Json(json!({ "lesson_plan": output.plan_text })).into_response()),
        Some(doc) => {
            info!(filename = %doc.filename, bytes = doc.bytes.len(), "serving document download");
            Ok((
                [
                    (header::CONTENT_TYPE, doc.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", doc.filename),
                    ),
                ],
                doc.bytes,
            )
                .into_response())
        }
    }
}
