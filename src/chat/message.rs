use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn new_user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn new_bot(content: impl Into<String>) -> Self {
        Self::new(Sender::Bot, content)
    }

    /// `10:05 AM` style clock time
    pub fn display_time(&self) -> String {
        self.timestamp.format("%I:%M %p").to_string()
    }
}
