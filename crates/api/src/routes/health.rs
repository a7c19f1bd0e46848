//! Liveness and readiness probe endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::routes::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub environment: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub version: String,
}

/// GET /health — liveness probe for orchestration restarts.
pub async fn liveness(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    metrics::counter!("http_requests_total", "endpoint" => "health").increment(1);

    Json(HealthResponse {
        status: "healthy",
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
    })
}

/// GET /ready — readiness probe. The service holds no external connections,
/// so it is ready as soon as it serves.
pub async fn readiness(State(state): State<Arc<AppState>>) -> Json<ReadyResponse> {
    metrics::counter!("http_requests_total", "endpoint" => "ready").increment(1);

    Json(ReadyResponse {
        status: "ready",
        version: state.config.version.clone(),
    })
}
