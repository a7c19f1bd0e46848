//! Demo HTTP service with health probes, static info and a JSON echo endpoint.
//!
//! Provides a handful of stateless REST endpoints with structured logging
//! (tracing) and Prometheus metrics. Every response on the JSON surface
//! carries `application/json`, including the 404 and 500 envelopes.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::AppConfig;
use error::ApiError;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::home::welcome))
        .route("/health", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/api/info", get(routes::info::describe))
        .route("/api/echo", post(routes::echo::echo))
        .fallback(routes::not_found)
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Creates the shared state handlers read their configuration from.
pub fn create_state(config: AppConfig) -> Arc<AppState> {
    Arc::new(AppState { config })
}

/// Converts a handler panic into the opaque 500 envelope.
///
/// The panic payload is logged via [`ApiError::Internal`] and never reaches
/// the response body.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(detail).into_response()
}
