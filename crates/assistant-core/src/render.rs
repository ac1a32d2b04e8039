//! Message Renderer
//!
//! Turns `(message, index)` into everything a view needs to draw one chat
//! bubble. Pure: the same inputs give the same [`MessageView`], apart from
//! whatever the timestamp formatter does with the current time.

use std::time::Duration;

use crate::clock::TimestampFormat;
use crate::message::{Message, Role};
use crate::motion::Transition;
use crate::style::Classes;

/// Delays of the three typing dots
pub const TYPING_DOT_DELAYS: [Duration; 3] = [
    Duration::from_millis(0),
    Duration::from_millis(150),
    Duration::from_millis(300),
];

/// Avatar glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Avatar {
    User,
    Bot,
}

/// Three pulsing dots shown before the first token arrives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingDots;

impl TypingDots {
    pub const fn delays(self) -> [Duration; 3] {
        TYPING_DOT_DELAYS
    }
}

/// What goes in the message body
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// Plain text, shown verbatim with whitespace preserved
    Text(String),
    /// Streaming started, nothing to show yet
    Typing(TypingDots),
}

impl Body {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Typing(_) => None,
        }
    }
}

/// Everything needed to draw one message
#[derive(Clone, Debug, PartialEq)]
pub struct MessageView {
    pub role: Role,
    pub label: &'static str,
    pub timestamp: String,
    /// Header spinner while the reply is in progress
    pub show_spinner: bool,
    pub body: Body,
    pub avatar: Avatar,
    pub container_class: String,
    pub avatar_class: String,
    pub transition: Transition,
}

/// Render one message at list position `index`
pub fn render(message: &Message, index: usize, formatter: &dyn TimestampFormat) -> MessageView {
    let streaming = message.is_streaming();

    let (avatar, container_class, avatar_class) = match message.role {
        Role::User => (
            Avatar::User,
            Classes::new("message").add("message-user"),
            Classes::new("avatar").add("avatar-user"),
        ),
        Role::Assistant => (
            Avatar::Bot,
            Classes::new("message").add("message-assistant"),
            Classes::new("avatar").add("avatar-assistant"),
        ),
    };

    let body = if message.shows_placeholder() {
        Body::Typing(TypingDots)
    } else {
        Body::Text(message.content.clone())
    };

    MessageView {
        role: message.role,
        label: message.role.label(),
        timestamp: formatter.format(&message.timestamp),
        show_spinner: streaming,
        body,
        avatar,
        container_class: container_class
            .add_if(streaming, "message-streaming")
            .into_string(),
        avatar_class: avatar_class.into_string(),
        transition: Transition::entrance(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    /// Deterministic formatter so tests don't depend on the wall clock
    struct Fixed;

    impl TimestampFormat for Fixed {
        fn format(&self, timestamp: &DateTime<Utc>) -> String {
            timestamp.format("%H:%M").to_string()
        }
    }

    fn message(role: Role, content: &str, streaming: Option<bool>) -> Message {
        let mut msg = Message::new(role, content).at(Utc.with_ymd_and_hms(2025, 10, 18, 14, 5, 0).unwrap());
        msg.is_streaming = streaming;
        msg
    }

    #[test]
    fn test_scenario_user_message() {
        let view = render(&message(Role::User, "Draft me an NDA", Some(false)), 0, &Fixed);

        assert_eq!(view.label, "You");
        assert_eq!(view.avatar, Avatar::User);
        assert_eq!(view.container_class, "message message-user");
        assert_eq!(view.avatar_class, "avatar avatar-user");
        assert_eq!(view.body, Body::Text("Draft me an NDA".into()));
        assert!(!view.show_spinner);
        assert_eq!(view.timestamp, "14:05");
        assert_eq!(view.transition.delay, Duration::ZERO);
    }

    #[test]
    fn test_scenario_empty_streaming_reply() {
        let view = render(&message(Role::Assistant, "", Some(true)), 1, &Fixed);

        assert_eq!(view.label, "Assistant");
        assert_eq!(view.avatar, Avatar::Bot);
        assert!(view.container_class.contains("message-assistant"));
        assert!(view.show_spinner);
        assert_eq!(view.body, Body::Typing(TypingDots));
        assert!(view.body.text().is_none());
        assert_eq!(view.transition.delay, Duration::from_millis(50));
    }

    #[test]
    fn test_scenario_partial_streaming_reply() {
        let view = render(&message(Role::Assistant, "Here is the clause...", Some(true)), 2, &Fixed);

        assert_eq!(view.label, "Assistant");
        assert!(view.show_spinner);
        assert_eq!(view.body.text(), Some("Here is the clause..."));
        assert_eq!(view.transition.delay, Duration::from_millis(100));
    }

    #[test]
    fn test_no_spinner_unless_streaming() {
        for streaming in [None, Some(false)] {
            for role in [Role::User, Role::Assistant] {
                let view = render(&message(role, "text", streaming), 0, &Fixed);
                assert!(!view.show_spinner);
                assert!(!view.container_class.contains("message-streaming"));
            }
        }
    }

    #[test]
    fn test_empty_finished_message_has_no_placeholder() {
        let view = render(&message(Role::Assistant, "", None), 0, &Fixed);
        assert_eq!(view.body, Body::Text(String::new()));
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let content = "  Clause 1:\n\tThe parties agree.\n\n   ";
        let view = render(&message(Role::Assistant, content, None), 0, &Fixed);
        assert_eq!(view.body.text(), Some(content));

        let blank = render(&message(Role::User, "   ", Some(true)), 0, &Fixed);
        assert_eq!(blank.body.text(), Some("   "));
    }

    #[test]
    fn test_markup_is_not_interpreted() {
        let content = "<b>bold</b> & <script>x</script>";
        let view = render(&message(Role::User, content, None), 0, &Fixed);
        assert_eq!(view.body.text(), Some(content));
    }

    #[test]
    fn test_render_is_idempotent() {
        let msg = message(Role::Assistant, "", Some(true));
        assert_eq!(render(&msg, 3, &Fixed), render(&msg, 3, &Fixed));
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let msg = message(Role::User, "Draft me an NDA", None);
        let before = msg.clone();
        let _ = render(&msg, 0, &Fixed);
        assert_eq!(msg, before);
    }

    #[test]
    fn test_typing_dot_delays() {
        let delays: Vec<u128> = TypingDots.delays().iter().map(Duration::as_millis).collect();
        assert_eq!(delays, vec![0, 150, 300]);
    }
}
