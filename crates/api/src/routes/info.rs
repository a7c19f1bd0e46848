//! Static application information endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::routes::AppState;

/// Feature list advertised by the info endpoint, in fixed order.
const FEATURES: [&str; 4] = [
    "RESTful API",
    "Health checks",
    "Kubernetes ready",
    "CI/CD integrated",
];

#[derive(Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: String,
    pub environment: String,
    pub features: [&'static str; 4],
}

/// GET /api/info — application name, version and feature list.
pub async fn describe(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    metrics::counter!("http_requests_total", "endpoint" => "info").increment(1);

    Json(InfoResponse {
        name: "GitHub Actions Demo App",
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
        features: FEATURES,
    })
}
