//! Welcome endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde::Serialize;

use crate::routes::AppState;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}

/// GET / — welcome message with deployment metadata.
///
/// The timestamp is current UTC in RFC 3339 form, computed per request.
#[tracing::instrument(skip(state))]
pub async fn welcome(State(state): State<Arc<AppState>>) -> Json<WelcomeResponse> {
    tracing::info!("home endpoint accessed");
    metrics::counter!("http_requests_total", "endpoint" => "home").increment(1);

    Json(WelcomeResponse {
        message: "Hello from GitHub Actions!",
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
