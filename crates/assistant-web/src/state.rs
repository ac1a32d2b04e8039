//! Conversation State
//!
//! Reactive wrapper around [`Conversation`]. Whatever delivers replies
//! (outside this crate) writes through these methods; the views only read.
//!
//! Rows only play their exit through [`ConversationState::start_over`];
//! there is no single-row removal.

use assistant_core::{Conversation, Message, MessageId, Transition};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ConversationState(RwSignal<Conversation>);

impl ConversationState {
    pub fn new() -> Self {
        Self(RwSignal::new(Conversation::new()))
    }

    /// Create one and make it available to descendants
    pub fn provide() -> Self {
        let state = Self::new();
        provide_context(state);
        state
    }

    /// The state provided by [`App`](crate::App)
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Messages in display order
    pub fn messages(self) -> Signal<Vec<Message>> {
        Signal::derive(move || self.0.with(|c| c.messages().to_vec()))
    }

    pub fn push(self, message: Message) -> MessageId {
        let id = message.id.clone();
        self.0.update(|c| {
            c.push(message);
        });
        id
    }

    pub fn push_user(self, content: impl Into<String>) -> MessageId {
        self.push(Message::user(content))
    }

    /// Start an assistant reply; it shows the typing dots until text arrives
    pub fn begin_reply(self) -> MessageId {
        self.push(Message::pending_reply())
    }

    pub fn append(self, id: &MessageId, delta: &str) {
        if let Some(Err(e)) = self.0.try_update(|c| c.append_delta(id, delta)) {
            leptos::logging::warn!("dropped streamed text: {e}");
        }
    }

    pub fn finish(self, id: &MessageId) {
        if let Some(Err(e)) = self.0.try_update(|c| c.finish_reply(id)) {
            leptos::logging::warn!("could not finish reply: {e}");
        }
    }

    /// Play the exit on every row now on screen, then drop those rows.
    ///
    /// Messages pushed while the exit plays stay.
    pub fn start_over(self) {
        let leaving = self.0.try_update(Conversation::begin_exit_all).unwrap_or_default();
        if leaving.is_empty() {
            return;
        }
        set_timeout(
            move || {
                self.0.update(|c| {
                    c.remove_all(&leaving);
                });
            },
            Transition::entrance(0).exit_after(),
        );
    }

    pub fn is_leaving(self, id: &MessageId) -> bool {
        self.0.with(|c| c.is_leaving(id))
    }

    pub fn is_streaming(self) -> bool {
        self.0.with(Conversation::is_streaming)
    }

    pub fn is_empty(self) -> bool {
        self.0.with(Conversation::is_empty)
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
