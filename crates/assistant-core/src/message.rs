//! Conversation Messages
//!
//! The message record handed to the renderer. Hosts own and mutate these;
//! rendering only ever borrows them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique message identifier, stable across re-renders
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person using the assistant
    User,
    /// The document assistant
    Assistant,
}

impl Role {
    /// Parse a wire role name.
    ///
    /// `"model"` is accepted as the assistant. Anything unrecognized is
    /// rendered as the assistant rather than rejected.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "user" => Self::User,
            "assistant" | "model" => Self::Assistant,
            other => {
                tracing::warn!(role = other, "unrecognized message role, treating as assistant");
                Self::Assistant
            }
        }
    }

    /// Header label shown next to the timestamp
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single turn in the conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Identifier; generated when missing on the wire
    #[serde(default)]
    pub id: MessageId,

    /// Who wrote it
    pub role: Role,

    /// Text content, possibly partial while streaming
    #[serde(default)]
    pub content: String,

    /// When the message was created
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,

    /// Whether the reply is still arriving. `None` means not streaming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_streaming: Option<bool>,
}

impl Message {
    /// Create a new, finished message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            is_streaming: None,
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// An assistant reply that has started but has no tokens yet
    pub fn pending_reply() -> Self {
        Self::assistant("").streaming(true)
    }

    /// Set the streaming flag
    #[must_use]
    pub fn streaming(mut self, streaming: bool) -> Self {
        self.is_streaming = Some(streaming);
        self
    }

    /// Set the timestamp
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn is_streaming(&self) -> bool {
        self.is_streaming.unwrap_or(false)
    }

    /// Streaming has begun but nothing has arrived yet
    pub fn shows_placeholder(&self) -> bool {
        self.is_streaming() && self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(!msg.is_streaming());
    }

    #[test]
    fn test_pending_reply_shows_placeholder() {
        let msg = Message::pending_reply();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.is_streaming());
        assert!(msg.shows_placeholder());

        let partial = Message::assistant("Here").streaming(true);
        assert!(!partial.shows_placeholder());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "Assistant");
    }

    #[test]
    fn test_role_from_wire() {
        assert_eq!(Role::from_wire("user"), Role::User);
        assert_eq!(Role::from_wire("assistant"), Role::Assistant);
        assert_eq!(Role::from_wire("model"), Role::Assistant);
        assert_eq!(Role::from_wire("system"), Role::Assistant);
        assert_eq!(Role::from_wire("USER"), Role::Assistant);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "m-1",
            "role": "assistant",
            "content": "",
            "timestamp": "2025-10-18T14:05:00Z",
            "isStreaming": true
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id.as_str(), "m-1");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.is_streaming, Some(true));
        assert!(msg.shows_placeholder());
    }

    #[test]
    fn test_deserialize_defaults() {
        let msg: Message = serde_json::from_str(r#"{"role": "user", "content": "hi"}"#).unwrap();
        assert_eq!(msg.is_streaming, None);
        assert!(!msg.is_streaming());
        assert!(!msg.id.as_str().is_empty());
    }

    #[test]
    fn test_unknown_role_degrades_to_assistant() {
        let msg: Message = serde_json::from_str(r#"{"role": "narrator", "content": "x"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn test_serialize_omits_absent_streaming_flag() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json.get("isStreaming").is_none());

        let json = serde_json::to_value(Message::pending_reply()).unwrap();
        assert_eq!(json["isStreaming"], true);
    }
}
