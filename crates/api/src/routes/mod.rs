//! HTTP route handlers and shared application state.

pub mod echo;
pub mod health;
pub mod home;
pub mod info;
pub mod metrics;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub config: AppConfig,
}

/// Fallback handler for requests no route matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
