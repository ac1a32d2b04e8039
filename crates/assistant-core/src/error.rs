//! Error Types

use thiserror::Error;

use crate::message::MessageId;

/// Result type alias for assistant front-end operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Errors raised by the conversation list and configuration loading.
///
/// Rendering itself never fails; these only surface from host-side mutations.
#[derive(Error, Debug)]
pub enum ChatError {
    /// No message with this id in the conversation
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    /// Tried to stream into a message that is not streaming
    #[error("Message is not streaming: {0}")]
    NotStreaming(MessageId),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::MessageNotFound(_) => "That message is no longer part of the conversation.".into(),
            Self::NotStreaming(_) => "The response has already finished.".into(),
            Self::Config(msg) => format!("The site configuration is invalid: {msg}"),
            Self::Json(_) => "The site configuration could not be read.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_id() {
        let id = MessageId::from_string("abc");
        let err = ChatError::NotStreaming(id);
        assert_eq!(err.to_string(), "Message is not streaming: abc");
    }

    #[test]
    fn test_json_error_converts() {
        let err: ChatError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ChatError::Json(_)));
        assert_eq!(err.user_message(), "The site configuration could not be read.");
    }
}
