//! HTTP server assembly and lifecycle

use tokio::net::TcpListener;
use tracing::info;

use crate::application::GenerateLessonPlanUseCase;
use crate::domain::config::AppConfig;
use crate::infrastructure::{CompositeExtractor, DocxRenderer, OpenAiPlanner, TesseractOcr};

use super::routes::router;
use super::state::AppState;

/// Wire the adapters from config and serve until shutdown
pub async fn serve(config: &AppConfig, api_key: String) -> std::io::Result<()> {
    let planner = OpenAiPlanner::with_model(api_key, config.model_or_default())
        .with_base_url(config.base_url_or_default());
    let ocr = TesseractOcr::with_settings(
        config.tesseract_path_or_default(),
        config.ocr_language_or_default(),
    );
    let extractor = CompositeExtractor::with_ocr(ocr);
    let use_case = GenerateLessonPlanUseCase::new(extractor, planner, DocxRenderer::new());

    let app = router(AppState::new(use_case), config.max_upload_bytes());

    let addr = format!("{}:{}", config.host_or_default(), config.port_or_default());
    let listener = TcpListener::bind(&addr).await?;
    info!(
        addr = %listener.local_addr()?,
        model = config.model_or_default(),
        "lesson-coach listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
