//! Legal Document Assistant Web Frontend
//!
//! Leptos-based WASM frontend for the chat interface.

mod app;
mod components;
mod layout;
mod pages;
mod state;

pub use app::App;
pub use components::{ChatMessage, MessageList};
pub use layout::RootLayout;
pub use state::ConversationState;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
