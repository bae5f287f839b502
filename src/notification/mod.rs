//! Notification channels, routing and dispatch.
//!
//! # Architecture
//!
//! ```text
//! AssistanceRequest ──► AssistanceDispatcher ──► ChannelRegistry
//!                                                   │
//!                                    ┌──────────────┴──────────────┐
//!                                    ▼                             ▼
//!                              EmailChannel                  SlackChannel
//!                              (mock, logs)              (chat.postMessage)
//! ```
//!
//! Channels report their own failures; the dispatcher absorbs them. Use
//! [`build_channel_registry`] to assemble the routing table from settings.

mod channel;
mod dispatcher;
mod email;
mod registry;
mod slack;

pub use channel::{ChannelError, NotificationChannel};
pub use dispatcher::{AssistanceDispatcher, DispatcherStats, DispatcherStatsSnapshot};
pub use email::EmailChannel;
pub use registry::{build_channel_registry, ChannelRegistry};
pub use slack::SlackChannel;
