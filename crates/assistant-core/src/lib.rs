//! # assistant-core
//!
//! Framework-independent model behind the legal document assistant's chat
//! view: messages, the on-screen conversation, and the renderer that turns a
//! message into a view model.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   (message, index)   ┌──────────────┐   MessageView   ┌───────────────┐
//! │ Conversation │─────────────────────▶│    render    │────────────────▶│  web / other  │
//! │  (host-side) │                      │ (pure, sync) │                 │   view layer  │
//! └──────────────┘                      └──────┬───────┘                 └───────────────┘
//!                                              │
//!                         TimestampFormat · Classes · Transition
//! ```
//!
//! Theme and page metadata live in [`SiteConfig`].

pub mod clock;
pub mod conversation;
pub mod error;
pub mod message;
pub mod motion;
pub mod render;
pub mod site;
pub mod style;
pub mod theme;

pub use clock::{ShortTime, TimestampFormat};
pub use conversation::Conversation;
pub use error::{ChatError, Result};
pub use message::{Message, MessageId, Role};
pub use motion::{Keyframe, Phase, Transition};
pub use render::{render, Avatar, Body, MessageView, TypingDots};
pub use site::{PageMetadata, SiteConfig};
pub use style::Classes;
pub use theme::Theme;
