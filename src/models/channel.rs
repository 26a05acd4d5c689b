use chrono::{DateTime, FixedOffset};

/// A single chat message extracted from a log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub timestamp: DateTime<FixedOffset>,
    pub sender: String,
    /// Raw message text. URLs are already wrapped in anchors, nothing else is escaped.
    pub content: String,
}

/// An IRC channel and the chat messages parsed from its log, in log order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    name: String,
    pub messages: Vec<Message>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), messages: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
