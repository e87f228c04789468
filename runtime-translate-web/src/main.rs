use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use runtime_translate::mt::api::{
    BatchTranslateRequest, BatchTranslateResponse, ErrorResponse, LanguagesResponse,
    TranslateRequest, TranslateResponse,
};
use runtime_translate::mt::{CacheStats, TranslateConfig, TranslationService};

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub service: TranslationService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var_os("TRANSLATE_CONFIG").map(std::path::PathBuf::from);
    let config = TranslateConfig::load(config_path.as_deref())
        .map_err(|e| format!("Failed to load configuration: {}", e))?;
    let service = TranslationService::from_config(&config)
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;

    info!(
        provider = service.provider_name(),
        cache_size = config.cache_size,
        timeout_ms = config.provider_timeout_ms,
        max_batch_concurrency = ?config.max_batch_concurrency,
        "Starting translation server"
    );

    let app = router(AppState { service });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
        .route("/api/cache/stats", get(cache_stats))
        .route("/api/translate", post(translate_text))
        .route("/api/translate/batch", post(translate_batch))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.service.provider_name(),
    }))
}

async fn languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse::current())
}

async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.service.cache().stats())
}

async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload.map_err(body_rejected)?;
    request.validate().map_err(bad_request)?;

    let result = state.service.translate(&request.text, &request.to).await;
    if let Some(err) = &result.error {
        warn!(to = %request.to, kind = err.kind(), "Served original text after provider failure");
    }

    Ok(Json(TranslateResponse::from_result(result, &request.to)))
}

async fn translate_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchTranslateRequest>, JsonRejection>,
) -> Result<Json<BatchTranslateResponse>, ApiError> {
    let Json(request) = payload.map_err(body_rejected)?;
    request.validate().map_err(bad_request)?;

    let batch = state
        .service
        .translate_batch(&request.texts, &request.to)
        .await;

    info!(
        count = batch.len(),
        failures = batch.failure_count(),
        to = %request.to,
        "Translated batch"
    );

    Ok(Json(BatchTranslateResponse::from_results(batch.items)))
}

fn bad_request(err: impl std::fmt::Display) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string())))
}

fn body_rejected(rejection: JsonRejection) -> ApiError {
    warn!(error = %rejection.body_text(), "Rejected unparseable request body");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!(
            "Failed to parse request: {}",
            rejection.body_text()
        ))),
    )
}
