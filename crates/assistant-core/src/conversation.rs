//! Conversation List
//!
//! Ordered, in-memory list of the messages on screen. The host (input box,
//! transport) mutates it; the renderer only reads it.

use std::collections::HashSet;

use crate::clock::TimestampFormat;
use crate::error::{ChatError, Result};
use crate::message::{Message, MessageId};
use crate::render::{render, MessageView};

/// Messages in display order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
    /// Rows playing their exit transition, still in `messages`
    leaving: HashSet<MessageId>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message at the end
    pub fn push(&mut self, message: Message) -> MessageId {
        let id = message.id.clone();
        tracing::debug!(%id, role = %message.role, "message added");
        self.messages.push(message);
        id
    }

    /// Add a finished user turn
    pub fn push_user(&mut self, content: impl Into<String>) -> MessageId {
        self.push(Message::user(content))
    }

    /// Start an assistant reply with no content yet
    pub fn begin_reply(&mut self) -> MessageId {
        self.push(Message::pending_reply())
    }

    /// Append streamed text to a reply in progress
    pub fn append_delta(&mut self, id: &MessageId, delta: &str) -> Result<()> {
        let message = self.streaming_mut(id)?;
        message.content.push_str(delta);
        Ok(())
    }

    /// Mark a reply as complete
    pub fn finish_reply(&mut self, id: &MessageId) -> Result<()> {
        let message = self.streaming_mut(id)?;
        message.is_streaming = Some(false);
        tracing::debug!(%id, chars = message.content.chars().count(), "reply finished");
        Ok(())
    }

    fn streaming_mut(&mut self, id: &MessageId) -> Result<&mut Message> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| ChatError::MessageNotFound(id.clone()))?;
        if !message.is_streaming() {
            return Err(ChatError::NotStreaming(id.clone()));
        }
        Ok(message)
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    /// Display position of a message
    pub fn position(&self, id: &MessageId) -> Option<usize> {
        self.messages.iter().position(|m| &m.id == id)
    }

    /// Get all messages
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get the last message
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Any reply still arriving
    pub fn is_streaming(&self) -> bool {
        self.messages.iter().any(Message::is_streaming)
    }

    /// Remove one message
    pub fn remove(&mut self, id: &MessageId) -> Result<Message> {
        let pos = self
            .position(id)
            .ok_or_else(|| ChatError::MessageNotFound(id.clone()))?;
        self.leaving.remove(id);
        Ok(self.messages.remove(pos))
    }

    /// Drop every message
    pub fn clear(&mut self) {
        self.messages.clear();
        self.leaving.clear();
    }

    /// Mark every message on screen as leaving.
    ///
    /// Returns the ids newly marked. Messages pushed afterwards are not
    /// affected, so pass the result to [`remove_all`](Self::remove_all)
    /// once the exit has played.
    pub fn begin_exit_all(&mut self) -> Vec<MessageId> {
        let marked: Vec<MessageId> = self
            .messages
            .iter()
            .filter(|m| !self.leaving.contains(&m.id))
            .map(|m| m.id.clone())
            .collect();
        self.leaving.extend(marked.iter().cloned());
        tracing::debug!(count = marked.len(), "messages leaving");
        marked
    }

    /// Playing its exit transition
    pub fn is_leaving(&self, id: &MessageId) -> bool {
        self.leaving.contains(id)
    }

    /// Remove the given messages, skipping ids already gone
    pub fn remove_all(&mut self, ids: &[MessageId]) -> usize {
        let before = self.messages.len();
        self.messages.retain(|m| !ids.contains(&m.id));
        for id in ids {
            self.leaving.remove(id);
        }
        before - self.messages.len()
    }

    /// Render every message, using list position as the stagger index
    pub fn render(&self, formatter: &dyn TimestampFormat) -> Vec<MessageView> {
        self.messages
            .iter()
            .enumerate()
            .map(|(index, message)| render(message, index, formatter))
            .collect()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            messages,
            leaving: HashSet::new(),
        }
    }
}
