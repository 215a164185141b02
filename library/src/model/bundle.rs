use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two parallel streams a value belongs to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Positive,
    Negative,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Positive, Channel::Negative];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::Positive => "positive",
            Channel::Negative => "negative",
        };
        write!(f, "{}", s)
    }
}

/// The (positive, negative) pair threaded along a chain edge.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bundle {
    pub positive: String,
    pub negative: String,
}

impl Bundle {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    /// A bundle with an empty negative channel, as sent by older nodes.
    pub fn positive_only(positive: impl Into<String>) -> Self {
        Self::new(positive, String::new())
    }

    pub fn channel(&self, channel: Channel) -> &str {
        match channel {
            Channel::Positive => &self.positive,
            Channel::Negative => &self.negative,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}
