//! Slack channel implementation.
//!
//! Posts notifications to a single Slack conversation through the Web API
//! `chat.postMessage` method. Delivery failures are logged and returned to the
//! caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::channel::{ChannelError, NotificationChannel};

const SLACK_API_BASE: &str = "https://slack.com/api";

/// Minimal view of a Slack Web API response envelope.
#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Sends assistance notifications to a configured Slack channel.
pub struct SlackChannel {
    client: Client,
    token: String,
    channel_id: String,
    api_base: String,
}

impl SlackChannel {
    /// Create a channel for `channel_id`, authenticating with the bot `token`.
    ///
    /// Both values are required; an empty one is a configuration error.
    pub fn new(token: impl Into<String>, channel_id: impl Into<String>) -> Result<Self, ChannelError> {
        let token = token.into();
        let channel_id = channel_id.into();

        if token.is_empty() {
            return Err(ChannelError::Configuration(
                "Slack token cannot be empty.".to_string(),
            ));
        }
        if channel_id.is_empty() {
            return Err(ChannelError::Configuration(
                "Slack channel ID cannot be empty.".to_string(),
            ));
        }

        let client = Client::builder().build().map_err(|e| {
            ChannelError::Configuration(format!("Failed to build Slack HTTP client: {}", e))
        })?;

        tracing::info!(channel_id = %channel_id, "SlackChannel initialized for channel {}", channel_id);

        Ok(Self {
            client,
            token,
            channel_id,
            api_base: SLACK_API_BASE.to_string(),
        })
    }

    /// Point the channel at a different Web API base URL (proxies, tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Render the markdown text posted for a request.
    pub fn format_message(topic: &str, message: &str) -> String {
        format!("*New Assistance Request - Topic: {}*\n> {}", topic, message)
    }

    /// Post `text` and decode the response envelope.
    ///
    /// A response that arrives but is not a Slack envelope (proxy error pages
    /// and the like) is reported as `Unexpected` with its HTTP status.
    async fn post_message(&self, text: &str) -> Result<SlackResponse, ChannelError> {
        let body = json!({
            "channel": self.channel_id,
            "text": text,
            "mrkdwn": true,
        });

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.api_base))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        serde_json::from_slice::<SlackResponse>(&bytes).map_err(|e| {
            ChannelError::Unexpected(format!(
                "HTTP {} with undecodable body: {}",
                status.as_u16(),
                e
            ))
        })
    }
}

#[async_trait]
impl NotificationChannel for SlackChannel {
    fn name(&self) -> &str {
        "slack"
    }

    async fn send(&self, topic: &str, message: &str) -> Result<(), ChannelError> {
        let text = Self::format_message(topic, message);

        match self.post_message(&text).await {
            Ok(response) if response.ok => {
                tracing::info!(
                    channel_id = %self.channel_id,
                    "Message sent to Slack channel {}",
                    self.channel_id
                );
                Ok(())
            }
            Ok(response) => {
                let code = response.error.unwrap_or_else(|| "unknown_error".to_string());
                tracing::error!(
                    channel_id = %self.channel_id,
                    error_code = %code,
                    "Error sending message to Slack channel {}: {}",
                    self.channel_id,
                    code
                );
                Err(ChannelError::Api { code })
            }
            Err(e) => {
                tracing::error!(
                    channel_id = %self.channel_id,
                    error = ?e,
                    "An unexpected error occurred when sending to Slack: {}",
                    e
                );
                Err(e)
            }
        }
    }
}
