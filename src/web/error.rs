//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::application::GenerateError;

/// JSON error response: `{"error": "..."}` with a mapped status code
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        let status = match &err {
            GenerateError::EmptyUpload => StatusCode::BAD_REQUEST,
            GenerateError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GenerateError::Planner(_) => StatusCode::BAD_GATEWAY,
            GenerateError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(%err, "generate request failed");
        } else {
            warn!(%err, "generate request rejected");
        }

        Self::new(status, err.to_string())
    }
}
