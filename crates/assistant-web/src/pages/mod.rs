//! Page Components

mod chat;
mod preview;

pub use chat::ChatPage;
pub use preview::PreviewPage;
