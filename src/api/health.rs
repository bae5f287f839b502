use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::Topic;
use crate::notification::DispatcherStatsSnapshot;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub channels: ChannelHealth,
}

#[derive(Debug, Serialize)]
pub struct ChannelHealth {
    /// Configured routes naming a known topic
    pub configured: usize,
    /// Routes that produced a working channel at startup
    pub registered: usize,
}

/// Liveness response for the versioned API
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub registered_topics: Vec<String>,
    pub dispatcher: DispatcherStatsSnapshot,
}

/// GET /health - service health with channel coverage
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    // Routes for unknown topics are skipped at startup and never count
    let configured = state
        .settings
        .channels
        .routes
        .keys()
        .filter(|topic| topic.parse::<Topic>().is_ok())
        .count();
    let registered = state.dispatcher.registry().len();

    // Missing channels do not stop the service, they only reduce coverage
    let status = if registered < configured {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        channels: ChannelHealth {
            configured,
            registered,
        },
    })
}

/// GET /v1/health - plain liveness probe
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

/// GET /stats - dispatch counters and routing table
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let registry = state.dispatcher.registry();

    Json(StatsResponse {
        registered_topics: registry.topics().into_iter().map(String::from).collect(),
        dispatcher: state.dispatcher.stats(),
    })
}
