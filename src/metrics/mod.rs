//! Prometheus metrics for the assistance notifier.
//!
//! This module provides metrics for monitoring request dispatch:
//! - Request metrics (accepted requests by topic)
//! - Delivery metrics (outcome by channel, send latency)
//! - Routing metrics (unrouted topics, registered channels)

mod helpers;

pub use helpers::{encode_metrics, DispatchMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, HistogramVec,
    IntCounterVec, IntGauge,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "assist";

lazy_static! {
    /// Total assistance requests handed to the dispatcher, by topic
    pub static ref REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_requests_total", METRIC_PREFIX),
        "Total assistance requests dispatched",
        &["topic"]
    ).unwrap();

    /// Total delivery attempts by channel and outcome (delivered / failed)
    pub static ref DELIVERIES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_deliveries_total", METRIC_PREFIX),
        "Total channel delivery attempts by outcome",
        &["channel", "outcome"]
    ).unwrap();

    /// Requests whose topic had no configured channel
    pub static ref UNROUTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_unrouted_total", METRIC_PREFIX),
        "Total requests with no channel configured for their topic",
        &["topic"]
    ).unwrap();

    /// Time spent inside a channel's send call
    pub static ref CHANNEL_SEND_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_channel_send_latency_seconds", METRIC_PREFIX),
        "Channel send latency in seconds",
        &["channel"],
        vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    ).unwrap();

    /// Number of topics with a registered channel
    pub static ref CHANNELS_REGISTERED: IntGauge = register_int_gauge!(
        format!("{}_channels_registered", METRIC_PREFIX),
        "Number of topics with a registered delivery channel"
    ).unwrap();
}
