//! Mock email channel.
//!
//! Stands in for a real mail transport: delivery is recorded as three log
//! lines and never fails.

use async_trait::async_trait;

use super::channel::{ChannelError, NotificationChannel};

/// Email channel that logs messages instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct EmailChannel;

impl EmailChannel {
    pub fn new() -> Self {
        Self
    }

    /// Mailbox a topic's notifications would be sent to.
    pub fn recipient(topic: &str) -> String {
        format!("{}_channel@example.com", topic)
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    fn name(&self) -> &str {
        "email"
    }

    async fn send(&self, topic: &str, message: &str) -> Result<(), ChannelError> {
        let recipient = Self::recipient(topic);

        tracing::info!(recipient = %recipient, "[Mock Email] To: {}", recipient);
        tracing::info!(topic = %topic, "[Mock Email] Subject: New Request - Topic: {}", topic);
        tracing::info!("[Mock Email] Body: {}", message);

        Ok(())
    }
}
