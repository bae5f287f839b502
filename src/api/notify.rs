//! Assistance request intake.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::{AssistanceRequest, Topic};
use crate::error::{AppError, Result};
use crate::server::AppState;

/// Characters of the description echoed into the receipt log line
const DESCRIPTION_PREVIEW_CHARS: usize = 50;

const ACCEPTED_MESSAGE: &str = "Request received and processing.";

/// Request body for `POST /v1/notify`
///
/// Fields are optional at the serde level so that a missing field produces a
/// field-specific message rather than a generic decode error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyRequest {
    pub topic: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub message: String,
}

impl NotifyRequest {
    /// Check the body and turn it into a domain request.
    ///
    /// All field problems are reported together.
    pub fn validate(self) -> Result<AssistanceRequest> {
        let mut errors = Vec::new();

        let topic = match self.topic.as_deref() {
            None => {
                errors.push("Topic is required.".to_string());
                None
            }
            Some(raw) => match raw.parse::<Topic>() {
                Ok(topic) => Some(topic),
                Err(_) => {
                    errors.push(topic_choices_message());
                    None
                }
            },
        };

        let description = match self.description {
            None => {
                errors.push("Description is required.".to_string());
                None
            }
            Some(d) if d.trim().is_empty() => {
                errors.push("Description cannot be empty.".to_string());
                None
            }
            Some(d) => Some(d),
        };

        match (topic, description) {
            (Some(topic), Some(description)) if errors.is_empty() => {
                Ok(AssistanceRequest::from((topic, description)))
            }
            _ => Err(AppError::Validation(errors.join(" "))),
        }
    }
}

fn topic_choices_message() -> String {
    let choices: Vec<String> = Topic::ALL.iter().map(|t| format!("'{}'", t)).collect();
    format!("Topic must be {}", choices.join(" or "))
}

fn preview(description: &str) -> String {
    description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect()
}

/// POST /v1/notify - accept an assistance request and route it
///
/// Responds 202 once the dispatcher returns, whether or not delivery
/// succeeded.
#[tracing::instrument(
    name = "http.notify",
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn notify(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NotifyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NotifyResponse>)> {
    let Json(body) = payload?;
    let request = body.validate()?;

    tracing::info!(
        topic = %request.topic(),
        "Received assistance request: topic='{}', description='{}...'",
        request.topic(),
        preview(request.description())
    );

    state.dispatcher.execute(&request).await;

    tracing::info!(
        topic = %request.topic(),
        "Assistance request for topic '{}' processed.",
        request.topic()
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(NotifyResponse {
            message: ACCEPTED_MESSAGE.to_string(),
        }),
    ))
}
