//! Delivery channel abstraction.
//!
//! A channel is anything that can deliver an assistance notification for a
//! topic. Each implementation decides how its own failures surface: the mock
//! email channel cannot fail, while the Slack channel reports every failure
//! back to its caller. The dispatcher is the final containment boundary.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by notification channels.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Required channel configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote messaging API rejected the call
    #[error("Messaging API error: {code}")]
    Api { code: String },

    /// Network or protocol failure while talking to the remote API
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but could not be understood
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Capability to deliver a message for a topic.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Channel type label used in logs and metrics
    fn name(&self) -> &str;

    /// Attempt delivery of `message` for `topic`.
    async fn send(&self, topic: &str, message: &str) -> Result<(), ChannelError>;
}
