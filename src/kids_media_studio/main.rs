mod application;
mod domain;
mod infrastructure;

use axum::{
    http::header::HeaderName,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use application::coloring_service::ColoringService;
use application::error::ApplicationError;
use application::speech_service::SpeechService;
use infrastructure::axum_handler::{self, AppState};
use infrastructure::config::Settings;
use infrastructure::external_image_fetcher::DefaultExternalImageFetcher;
use infrastructure::file_storage::LocalFileStorage;
use infrastructure::gemini_speech_client::GeminiSpeechClient;
use infrastructure::image_processor::DefaultImageProcessor;
use infrastructure::observability::init_tracing;

fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    Router::new()
        .route("/coloring/palette", get(axum_handler::palette_handler))
        .route("/coloring/fill", post(axum_handler::fill_handler))
        .route("/coloring/upload", post(axum_handler::upload_fill_handler))
        .route("/coloring/artwork", get(axum_handler::preview_artwork_handler))
        .route("/coloring/artwork/download", get(axum_handler::download_artwork_handler))
        .route("/speech", post(axum_handler::speech_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_state(settings: &Settings) -> Result<AppState, ApplicationError> {
    let http_client = reqwest::Client::builder()
        .build()
        .map_err(|e| ApplicationError::ConfigurationError(format!("failed to build HTTP client: {}", e)))?;

    let coloring_service = ColoringService::new(
        Arc::new(DefaultImageProcessor::new()),
        Arc::new(DefaultExternalImageFetcher::new(http_client.clone())),
        Arc::new(LocalFileStorage::new(settings.server.artwork_path.clone())),
    );

    if settings.speech.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; /speech will answer 503");
    }
    let speech_client = GeminiSpeechClient::new(
        http_client,
        settings.speech.api_base.clone(),
        settings.speech.model.clone(),
        settings.speech.api_key.clone(),
    );
    let speech_service = SpeechService::new(Arc::new(speech_client), settings.speech.default_voice.clone());

    Ok(AppState {
        coloring_service: Arc::new(coloring_service),
        speech_service: Arc::new(speech_service),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(&settings.logging);

    let state = Arc::new(build_state(&settings)?);
    let app = build_router(state, &settings.server.static_dir);

    tracing::info!(
        addr = %settings.server.bind_addr,
        static_dir = %settings.server.static_dir.display(),
        model = %settings.speech.model,
        "kids media studio listening"
    );

    // サーバーの開始
    axum::Server::bind(&settings.server.bind_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
