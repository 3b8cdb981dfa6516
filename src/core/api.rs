//! HTTP API for spamlens
//!
//! Endpoints:
//! - POST /classify - Classify one message, explain if spam
//! - GET /health - Health check

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::SpamDetector;
use crate::types::Label;

/// App state, shared read-only across requests
pub struct AppState {
    pub detector: SpamDetector,
}

/// Classify request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

/// Classify response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub label: Label,
    pub confidence: f64,
    /// Catalog texts, evaluation order
    pub reasons: Vec<String>,
    pub reason_codes: Vec<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub classifier: String,
}

/// Create the API router
pub fn create_router(detector: SpamDetector) -> Router {
    let state = Arc::new(AppState { detector });

    Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        classifier: state.detector.classifier_name().to_string(),
    })
}

/// Classify one message
async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, StatusCode> {
    // Only the empty string is refused, same as the form
    if req.message.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let verdict = state.detector.evaluate(&req.message).map_err(|e| {
        error!("Classification failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(ClassifyResponse {
        label: verdict.label,
        confidence: verdict.confidence,
        reasons: verdict
            .reasons
            .iter()
            .map(|r| r.description().to_string())
            .collect(),
        reason_codes: verdict.reasons.iter().map(|r| r.code().to_string()).collect(),
    }))
}

/// Run the API server
pub async fn run_server(addr: &str, detector: SpamDetector) -> anyhow::Result<()> {
    let router = create_router(detector);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("spamlens API running on {}", addr);
    info!("  POST /classify - Classify a message");
    info!("  GET  /health   - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
