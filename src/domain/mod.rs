//! Domain layer modules
//!
//! This module contains the business domain values:
//! - `request`: Assistance requests and the closed set of routing topics

mod request;

pub use request::{AssistanceRequest, Topic, UnknownTopic};
