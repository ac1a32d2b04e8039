//! Preview Page
//!
//! Every message state side by side, plus a replayed reply that streams in
//! word by word.

use std::collections::VecDeque;
use std::time::Duration;

use assistant_core::{Message, MessageId};
use chrono::{TimeDelta, Utc};
use leptos::prelude::*;

use crate::components::{ChatMessage, MessageList};
use crate::state::ConversationState;

const SAMPLE_REQUEST: &str = "Can you add a non-solicitation clause?";

const SAMPLE_REPLY: &str = "Here is the clause:\n\n\
    7. Non-Solicitation. For twelve (12) months after termination, the Receiving \
    Party shall not, directly or indirectly, solicit any employee of the Disclosing \
    Party.\n\nShall I add it to the agreement?";

/// How long the typing dots show before the first word
const FIRST_TOKEN_DELAY: Duration = Duration::from_millis(1200);
const TOKEN_INTERVAL: Duration = Duration::from_millis(60);

#[component]
pub fn PreviewPage() -> impl IntoView {
    let now = Utc::now();
    let states = vec![
        Message::user("Draft me an NDA")
            .streaming(false)
            .at(now - TimeDelta::minutes(2)),
        Message::pending_reply().at(now - TimeDelta::minutes(1)),
        Message::assistant("Here is the clause...").streaming(true).at(now),
    ];

    let replay = ConversationState::new();
    let (running, set_running) = signal(false);

    let start = move |_| {
        if running.get() {
            return;
        }
        set_running.set(true);
        replay.start_over();
        replay.push_user(SAMPLE_REQUEST);
        let id = replay.begin_reply();
        let words: VecDeque<String> = SAMPLE_REPLY.split_inclusive(' ').map(str::to_owned).collect();
        set_timeout(
            move || stream_words(replay, id, words, set_running),
            FIRST_TOKEN_DELAY,
        );
    };

    view! {
        <div class="preview">
            <h1>"Message states"</h1>
            <div class="messages">
                {states
                    .into_iter()
                    .enumerate()
                    .map(|(index, message)| {
                        view! {
                            <ChatMessage message=Signal::derive(move || message.clone()) index=index />
                        }
                    })
                    .collect_view()}
            </div>

            <h2>"Streaming replay"</h2>
            <button class="btn" on:click=start disabled=move || running.get()>
                "Replay"
            </button>
            <MessageList conversation=replay />
        </div>
    }
}

fn stream_words(
    state: ConversationState,
    id: MessageId,
    mut words: VecDeque<String>,
    running: WriteSignal<bool>,
) {
    let Some(word) = words.pop_front() else {
        state.finish(&id);
        running.set(false);
        return;
    };
    state.append(&id, &word);
    set_timeout(move || stream_words(state, id, words, running), TOKEN_INTERVAL);
}
