//! OpenAI-compatible chat-completions planner adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LessonPlanner, PlannerError};
use crate::domain::lesson::SystemPrompt;

/// Chat model to use
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI API base URL
const API_BASE_URL: &str = "https://api.openai.com/v1";

/// Sampling temperature; kept low for consistent plan structure
const TEMPERATURE: f32 = 0.4;

// Request types for the chat-completions API

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

// Response types for the chat-completions API

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[allow(dead_code)]
    code: Option<serde_json::Value>,
}

/// OpenAI-compatible planner
pub struct OpenAiPlanner {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiPlanner {
    /// Create a new planner with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a new planner with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the endpoint base URL (proxies, compatible backends, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Build the request body
    fn build_request(&self, system_prompt: &SystemPrompt, user_prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.content().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
        }
    }

    /// Extract plan text from response
    fn extract_text(response: &ChatCompletionResponse) -> Option<String> {
        response
            .choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .clone()
    }
}

#[async_trait]
impl LessonPlanner for OpenAiPlanner {
    async fn draft_plan(
        &self,
        system_prompt: &SystemPrompt,
        user_prompt: &str,
    ) -> Result<String, PlannerError> {
        let url = self.api_url();
        let body = self.build_request(system_prompt, user_prompt);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PlannerError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PlannerError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlannerError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PlannerError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // Parse response
        let response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| PlannerError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(PlannerError::ApiError(error.message));
        }

        // Extract plan text from response
        let text = Self::extract_text(&response).ok_or(PlannerError::EmptyResponse)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PlannerError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lesson::TargetRating;

    #[test]
    fn build_request_has_correct_structure() {
        let planner = OpenAiPlanner::new("test-key");
        let prompt = SystemPrompt::build(TargetRating::Good);

        let request = planner.build_request(&prompt, "Teacher Name: Sara");

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.contains("ELT"));
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "Teacher Name: Sara");
        assert!((request.temperature - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn api_url_joins_base_and_path() {
        let planner = OpenAiPlanner::new("test-key");
        assert_eq!(
            planner.api_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn api_url_tolerates_trailing_slash() {
        let planner = OpenAiPlanner::new("key").with_base_url("http://localhost:9000/v1/");
        assert_eq!(planner.api_url(), "http://localhost:9000/v1/chat/completions");
    }

    #[test]
    fn custom_model() {
        let planner = OpenAiPlanner::with_model("key", "gpt-4o");
        let prompt = SystemPrompt::default();
        let request = planner.build_request(&prompt, "x");
        assert_eq!(request.model, "gpt-4o");
    }

    #[test]
    fn extract_text_from_response() {
        let response = ChatCompletionResponse {
            choices: Some(vec![Choice {
                message: Some(ResponseMessage {
                    content: Some("## SECTION 1".to_string()),
                }),
            }]),
            error: None,
        };

        let text = OpenAiPlanner::extract_text(&response);
        assert_eq!(text, Some("## SECTION 1".to_string()));
    }

    #[test]
    fn extract_text_empty_response() {
        let response = ChatCompletionResponse {
            choices: None,
            error: None,
        };

        let text = OpenAiPlanner::extract_text(&response);
        assert!(text.is_none());
    }
}
