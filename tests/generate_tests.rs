//! End-to-end HTTP tests
//!
//! These spin up the real router on an ephemeral port with the chat API
//! mocked by wiremock, then drive it with a reqwest client.

use std::net::SocketAddr;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lesson_coach::application::GenerateLessonPlanUseCase;
use lesson_coach::infrastructure::{CompositeExtractor, DocxRenderer, OpenAiPlanner};
use lesson_coach::web::{router, AppState};

const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Start the app wired to the given chat API base URL, return its address
async fn spawn_app(api_base_url: &str) -> SocketAddr {
    let planner = OpenAiPlanner::new("test-key").with_base_url(api_base_url);
    let use_case =
        GenerateLessonPlanUseCase::new(CompositeExtractor::new(), planner, DocxRenderer::new());
    let app = router(AppState::new(use_case), MAX_UPLOAD_BYTES);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    addr
}

/// Mock a successful chat-completions response with the given plan text
async fn mock_chat_api(plan_text: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": plan_text } }
            ]
        })))
        .mount(&server)
        .await;
    server
}

fn lesson_form(filename: &str, content: &[u8]) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(content.to_vec()).file_name(filename.to_string());
    reqwest::multipart::Form::new()
        .part("file", part)
        .text("teacher_name", "Jordan Lee")
        .text("lesson_number", "3")
        .text("lesson_duration", "45 minutes")
        .text("target_rating", "good")
}

#[tokio::test]
async fn home_returns_banner() {
    let api = mock_chat_api("unused").await;
    let addr = spawn_app(&api.uri()).await;

    let response = reqwest::get(format!("http://{}/", addr))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert!(body["message"]
        .as_str()
        .expect("message field")
        .contains("Lesson Planner"));
}

#[tokio::test]
async fn generate_returns_lesson_plan_json() {
    let plan = "## Lesson Plan\n\n- Warmer: 5 minutes\n- Main task: 30 minutes";
    let api = mock_chat_api(plan).await;
    let addr = spawn_app(&api.uri()).await;

    let form = lesson_form("lesson.txt", b"Past simple vs present perfect, B1 group.");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["lesson_plan"].as_str(), Some(plan));
}

#[tokio::test]
async fn generate_docx_format_returns_attachment() {
    let plan = "## Observation Plan\n\nTeacher: Jordan Lee\n\n- Stage one\n- Stage two";
    let api = mock_chat_api(plan).await;
    let addr = spawn_app(&api.uri()).await;

    let form =
        lesson_form("lesson.txt", b"Reading comprehension, intermediate.").text("format", "docx");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("wordprocessingml"), "{}", content_type);

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("attachment"), "{}", disposition);
    assert!(disposition.contains(".docx"), "{}", disposition);

    let bytes = response.bytes().await.expect("body bytes");
    // DOCX is a zip archive
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn generate_without_file_is_bad_request() {
    let api = mock_chat_api("unused").await;
    let addr = spawn_app(&api.uri()).await;

    let form = reqwest::multipart::Form::new().text("teacher_name", "Jordan Lee");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["error"].as_str(), Some("No file uploaded"));
}

#[tokio::test]
async fn generate_with_empty_file_is_bad_request() {
    let api = mock_chat_api("unused").await;
    let addr = spawn_app(&api.uri()).await;

    let form = lesson_form("empty.txt", b"");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn generate_with_invalid_rating_is_bad_request() {
    let api = mock_chat_api("unused").await;
    let addr = spawn_app(&api.uri()).await;

    let form =
        lesson_form("lesson.txt", b"Some content").text("target_rating", "legendary");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert!(body["error"]
        .as_str()
        .expect("error field")
        .contains("legendary"));
}

#[tokio::test]
async fn generate_with_corrupt_pdf_is_unprocessable() {
    let api = mock_chat_api("unused").await;
    let addr = spawn_app(&api.uri()).await;

    let form = lesson_form("lesson.pdf", b"this is not a pdf at all");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn upstream_auth_failure_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let addr = spawn_app(&server.uri()).await;

    let form = lesson_form("lesson.txt", b"Some content");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 502);
}

#[tokio::test]
async fn upstream_empty_choices_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;
    let addr = spawn_app(&server.uri()).await;

    let form = lesson_form("lesson.txt", b"Some content");
    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .multipart(form)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 502);
}
