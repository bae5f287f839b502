//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{
    CHANNELS_REGISTERED, CHANNEL_SEND_LATENCY, DELIVERIES_TOTAL, REQUESTS_TOTAL, UNROUTED_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording dispatch metrics
pub struct DispatchMetrics;

impl DispatchMetrics {
    /// Record a request entering the dispatcher
    pub fn record_request(topic: &str) {
        REQUESTS_TOTAL.with_label_values(&[topic]).inc();
    }

    /// Record a successful channel delivery
    pub fn record_delivered(channel: &str, elapsed: Duration) {
        DELIVERIES_TOTAL
            .with_label_values(&[channel, "delivered"])
            .inc();
        CHANNEL_SEND_LATENCY
            .with_label_values(&[channel])
            .observe(elapsed.as_secs_f64());
    }

    /// Record a failed channel delivery
    pub fn record_failed(channel: &str, elapsed: Duration) {
        DELIVERIES_TOTAL.with_label_values(&[channel, "failed"]).inc();
        CHANNEL_SEND_LATENCY
            .with_label_values(&[channel])
            .observe(elapsed.as_secs_f64());
    }

    /// Record a request whose topic had no channel
    pub fn record_unrouted(topic: &str) {
        UNROUTED_TOTAL.with_label_values(&[topic]).inc();
    }

    /// Set the number of registered channels
    pub fn set_registered(count: usize) {
        CHANNELS_REGISTERED.set(count as i64);
    }
}
