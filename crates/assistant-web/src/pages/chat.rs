//! Chat Page

use leptos::prelude::*;

use crate::components::MessageList;
use crate::state::ConversationState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let conversation = ConversationState::expect();
    let (input, set_input) = signal(String::new());

    let send = move || {
        let text = input.get();
        if text.trim().is_empty() || conversation.is_streaming() {
            return;
        }
        conversation.push_user(text);
        set_input.set(String::new());
    };

    view! {
        <div class="chat">
            <header class="chat-header">
                <h1>"Legal Document Assistant"</h1>
                <button class="btn btn-quiet" on:click=move |_| conversation.start_over()>
                    "New conversation"
                </button>
            </header>

            <Show when=move || conversation.is_empty()>
                <p class="empty">"Describe the document you need, e.g. \"Draft me an NDA\"."</p>
            </Show>
            <MessageList conversation=conversation />

            <div class="composer">
                <textarea
                    placeholder="Ask for a document or an edit..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button class="btn" on:click=move |_| send() disabled=move || conversation.is_streaming()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
