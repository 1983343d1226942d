//! Chat message model for the assistant conversation log

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A reference link attached to an assistant answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingLink {
    pub title: String,
    pub uri: String,
}

/// One entry in the append-only conversation log
///
/// Messages live in session state for the lifetime of the session and
/// are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<GroundingLink>,
    /// Creation time as unix milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    /// Create a user message stamped with the current time
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            links: Vec::new(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Create an assistant message stamped with the current time
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            links: Vec::new(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Attach reference links to this message
    #[must_use]
    pub fn with_links(mut self, links: Vec<GroundingLink>) -> Self {
        self.links = links;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("where is cyber towers");
        assert_eq!(user.role, Role::User);
        assert!(user.links.is_empty());
        assert!(user.timestamp > 0);

        let assistant = ChatMessage::assistant("right here");
        assert_eq!(assistant.role, Role::Assistant);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
