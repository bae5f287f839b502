use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::error::AppError;
use crate::server::AppState;

use super::health::{health, stats, status};
use super::metrics::prometheus_metrics;
use super::notify::notify;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health, Stats & Metrics
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/metrics", get(prometheus_metrics))
        .nest(
            "/v1",
            Router::new()
                .route("/health", get(status))
                .route("/health/", get(status))
                .route("/tasks/health", get(status))
                // Assistance requests
                .route("/notify", post(notify))
                .route("/notify/", post(notify)),
        )
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
