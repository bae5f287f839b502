//! Topic-routed dispatch of assistance requests.
//!
//! The dispatcher accepts any topic string. Metric labels are limited to the
//! known topics plus a single `unknown` bucket so that stray topics cannot grow
//! the metric set.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use futures::FutureExt;
use serde::Serialize;

use crate::domain::{AssistanceRequest, Topic};
use crate::metrics::DispatchMetrics;

use super::ChannelRegistry;

/// Metric label for topics outside the closed set
const UNKNOWN_TOPIC_LABEL: &str = "unknown";

/// How a single dispatch ended. Only visible through stats and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchOutcome {
    Delivered,
    Failed,
    Unrouted,
}

/// Statistics for the assistance dispatcher
#[derive(Debug, Default)]
pub struct DispatcherStats {
    /// Total requests executed
    pub total_requests: AtomicU64,
    /// Requests delivered by their channel
    pub total_delivered: AtomicU64,
    /// Requests whose channel failed
    pub total_failed: AtomicU64,
    /// Requests with no channel for their topic
    pub total_unrouted: AtomicU64,
}

impl DispatcherStats {
    pub fn snapshot(&self) -> DispatcherStatsSnapshot {
        DispatcherStatsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            total_delivered: self.total_delivered.load(Ordering::Relaxed),
            total_failed: self.total_failed.load(Ordering::Relaxed),
            total_unrouted: self.total_unrouted.load(Ordering::Relaxed),
        }
    }

    fn record(&self, outcome: DispatchOutcome) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome {
            DispatchOutcome::Delivered => &self.total_delivered,
            DispatchOutcome::Failed => &self.total_failed,
            DispatchOutcome::Unrouted => &self.total_unrouted,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Snapshot of dispatcher statistics
#[derive(Debug, Clone, Serialize)]
pub struct DispatcherStatsSnapshot {
    pub total_requests: u64,
    pub total_delivered: u64,
    pub total_failed: u64,
    pub total_unrouted: u64,
}

/// Routes assistance requests to the channel registered for their topic.
///
/// The dispatcher is the containment boundary for channel failures: errors
/// and panics raised by a channel are logged and never reach the caller.
pub struct AssistanceDispatcher {
    registry: ChannelRegistry,
    stats: DispatcherStats,
}

impl AssistanceDispatcher {
    pub fn new(registry: ChannelRegistry) -> Self {
        DispatchMetrics::set_registered(registry.len());
        Self {
            registry,
            stats: DispatcherStats::default(),
        }
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Get dispatcher statistics
    pub fn stats(&self) -> DispatcherStatsSnapshot {
        self.stats.snapshot()
    }

    /// Deliver `request` through its topic's channel.
    ///
    /// Always returns normally. Delivered, failed and unrouted requests look
    /// the same to the caller.
    #[tracing::instrument(
        name = "dispatcher.execute",
        skip(self, request),
        fields(topic = %request.topic())
    )]
    pub async fn execute(&self, request: &AssistanceRequest) {
        DispatchMetrics::record_request(topic_label(request.topic()));
        let outcome = self.dispatch(request).await;
        self.stats.record(outcome);
    }

    async fn dispatch(&self, request: &AssistanceRequest) -> DispatchOutcome {
        let topic = request.topic();

        let Some(channel) = self.registry.get(topic) else {
            tracing::warn!(
                topic = %topic,
                "No notification channel configured for topic: {}",
                topic
            );
            DispatchMetrics::record_unrouted(topic_label(topic));
            return DispatchOutcome::Unrouted;
        };

        let started = Instant::now();
        let result = AssertUnwindSafe(channel.send(topic, request.description()))
            .catch_unwind()
            .await;
        let elapsed = started.elapsed();

        let failure = match result {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(panic) => Some(format!("channel panicked: {}", panic_message(&*panic))),
        };

        match failure {
            None => {
                tracing::info!(
                    topic = %topic,
                    channel = channel.name(),
                    "Sent notification for topic '{}' via {}",
                    topic,
                    channel.name()
                );
                DispatchMetrics::record_delivered(channel.name(), elapsed);
                DispatchOutcome::Delivered
            }
            Some(detail) => {
                tracing::error!(
                    topic = %topic,
                    channel = channel.name(),
                    error = %detail,
                    "Failed to send notification for topic '{}' via {}: {}",
                    topic,
                    channel.name(),
                    detail
                );
                DispatchMetrics::record_failed(channel.name(), elapsed);
                DispatchOutcome::Failed
            }
        }
    }
}

fn topic_label(topic: &str) -> &'static str {
    topic
        .parse::<Topic>()
        .map(|t| t.as_str())
        .unwrap_or(UNKNOWN_TOPIC_LABEL)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
