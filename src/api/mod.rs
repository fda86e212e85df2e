//! HTTP interface of the AI service.

pub mod handlers;
pub mod types;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json,
    },
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::engine::AiEngine;
use crate::error::{HiveAiError, Result};
use types::ErrorResponse;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AiEngine>,
}

/// Routes of the service, without middleware
pub fn create_router(engine: Arc<AiEngine>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/ai/health", get(handlers::ai_health))
        .route("/api/ai/recommend-users", post(handlers::recommend_users))
        .route("/api/ai/moderate-content", post(handlers::moderate_content))
        .route("/api/ai/smart-search", post(handlers::smart_search))
        .route("/api/ai/match-skills", post(handlers::match_skills))
        .route("/api/ai/recommend-events", post(handlers::recommend_events))
        .with_state(AppState { engine })
}

/// Full application: engine, routes, tracing and CORS
pub fn build_app(config: &ServiceConfig) -> Result<Router> {
    let engine = Arc::new(AiEngine::new(config.engine.clone())?);

    Ok(create_router(engine)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

/// CORS policy for the configured origins
pub fn cors_layer(config: &ServiceConfig) -> Result<CorsLayer> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                HiveAiError::InvalidInput(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

// Error handling
#[derive(Debug)]
pub enum ApiError {
    /// Failure inside the engine; always reported as 500
    Engine(HiveAiError),
    /// Body could not be read as the expected JSON
    Rejected(JsonRejection),
    /// Query string could not be parsed
    QueryRejected(QueryRejection),
    /// Body parsed but a required value is missing
    Unprocessable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Engine(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::QueryRejected(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Unprocessable(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        tracing::error!("❌ Error: {} - {}", status, detail);

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<HiveAiError> for ApiError {
    fn from(err: HiveAiError) -> Self {
        ApiError::Engine(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::QueryRejected(rejection)
    }
}
