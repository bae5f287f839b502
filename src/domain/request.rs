use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification label that routes a request to a delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Sales,
    Pricing,
}

impl Topic {
    /// Every topic accepted at the HTTP boundary.
    pub const ALL: [Topic; 2] = [Topic::Sales, Topic::Pricing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Sales => "sales",
            Topic::Pricing => "pricing",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown topic: {0}")]
pub struct UnknownTopic(pub String);

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales" => Ok(Topic::Sales),
            "pricing" => Ok(Topic::Pricing),
            other => Err(UnknownTopic(other.to_string())),
        }
    }
}

/// A customer assistance request.
///
/// The topic is kept as a plain string: the HTTP layer validates it against
/// [`Topic::ALL`], but dispatch must still cope with topics that have no
/// registered channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistanceRequest {
    topic: String,
    description: String,
}

impl AssistanceRequest {
    pub fn new(topic: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            description: description.into(),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<(Topic, String)> for AssistanceRequest {
    fn from((topic, description): (Topic, String)) -> Self {
        Self::new(topic.as_str(), description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_parse() {
        assert_eq!("sales".parse::<Topic>(), Ok(Topic::Sales));
        assert_eq!("pricing".parse::<Topic>(), Ok(Topic::Pricing));
        assert_eq!(
            "support".parse::<Topic>(),
            Err(UnknownTopic("support".to_string()))
        );
        // Topics are case sensitive on the wire
        assert!("Sales".parse::<Topic>().is_err());
    }

    #[test]
    fn test_topic_display_matches_wire_format() {
        for topic in Topic::ALL {
            assert_eq!(topic.to_string(), topic.as_str());
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.as_str()));
        }
    }

    #[test]
    fn test_request_from_validated_topic() {
        let request = AssistanceRequest::from((Topic::Pricing, "How much?".to_string()));
        assert_eq!(request.topic(), "pricing");
        assert_eq!(request.description(), "How much?");
    }

    #[test]
    fn test_request_accepts_arbitrary_topic() {
        let request = AssistanceRequest::new("unknown_topic", "x");
        assert_eq!(request.topic(), "unknown_topic");
    }
}
