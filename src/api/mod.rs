//! API layer - HTTP endpoint handlers.

mod health;
mod metrics;
mod notify;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use health::{health, stats, status, HealthResponse, StatsResponse};
pub use metrics::prometheus_metrics;
pub use notify::{notify, NotifyRequest, NotifyResponse};
pub use routes::api_routes;
