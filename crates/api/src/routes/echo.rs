//! JSON echo endpoint.

use axum::Json;
use axum::body::Bytes;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct EchoResponse {
    pub received: Value,
    pub timestamp: String,
}

/// POST /api/echo — returns the posted JSON document.
///
/// Absent or malformed bodies are tolerated: `received` is `null` and the
/// status stays 200.
#[tracing::instrument(skip(body))]
pub async fn echo(body: Bytes) -> Json<EchoResponse> {
    let received = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    tracing::info!(data = %received, "echo endpoint called");
    metrics::counter!("http_requests_total", "endpoint" => "echo").increment(1);

    Json(EchoResponse {
        received,
        timestamp: Utc::now().to_rfc3339(),
    })
}
