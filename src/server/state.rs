use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::notification::{build_channel_registry, AssistanceDispatcher};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub dispatcher: Arc<AssistanceDispatcher>,
    pub start_time: Instant,
}

impl AppState {
    /// Build the channel registry from settings and wire up the dispatcher.
    pub fn new(settings: Settings) -> Self {
        let registry = build_channel_registry(&settings.channels);
        tracing::info!(
            registered = registry.len(),
            topics = ?registry.topics(),
            "Channel registry built"
        );

        let dispatcher = Arc::new(AssistanceDispatcher::new(registry));
        Self::with_dispatcher(settings, dispatcher)
    }

    /// Use an already assembled dispatcher.
    pub fn with_dispatcher(settings: Settings, dispatcher: Arc<AssistanceDispatcher>) -> Self {
        Self {
            settings: Arc::new(settings),
            dispatcher,
            start_time: Instant::now(),
        }
    }
}
