//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ara_assist_notifier::notification::{ChannelError, ChannelRegistry, NotificationChannel};

/// Channel that records every send and optionally fails.
pub struct RecordingChannel {
    failure: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingChannel {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            failure: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(detail.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, topic: &str, message: &str) -> Result<(), ChannelError> {
        self.calls
            .lock()
            .unwrap()
            .push((topic.to_string(), message.to_string()));

        match &self.failure {
            Some(detail) => Err(ChannelError::Unexpected(detail.clone())),
            None => Ok(()),
        }
    }
}

/// Registry from `(topic, channel)` pairs.
pub fn registry(entries: Vec<(&str, Arc<RecordingChannel>)>) -> ChannelRegistry {
    entries
        .into_iter()
        .map(|(topic, channel)| (topic, channel as Arc<dyn NotificationChannel>))
        .collect()
}
