//! UI Components

use assistant_core::{render, Avatar, Body, Message, MessageId, Phase, ShortTime, TypingDots};
use leptos::prelude::*;

use crate::state::ConversationState;

/// One chat message: avatar, header, body, entrance/exit motion.
///
/// Reads the message reactively, so streamed text updates the same node
/// without replaying the entrance.
#[component]
pub fn ChatMessage(
    /// Message to show
    #[prop(into)]
    message: Signal<Message>,
    /// Position in the list; only affects the entrance delay
    index: usize,
    /// Play the exit transition while true
    #[prop(default = None)]
    leaving: Option<Signal<bool>>,
) -> impl IntoView {
    let formatter = ShortTime::local();
    let view_model = Memo::new(move |_| message.with(|m| render(m, index, &formatter)));

    // Two frames so the initial style is painted before it changes
    let (entered, set_entered) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || request_animation_frame(move || set_entered.set(true)));
    });

    let style = move || {
        let phase = if leaving.is_some_and(|l| l.get()) {
            Phase::Exiting
        } else if entered.get() {
            Phase::Entered
        } else {
            Phase::Initial
        };
        view_model.with(|v| v.transition.style(phase))
    };

    view! {
        <div class=move || view_model.with(|v| v.container_class.clone()) style=style>
            <div class=move || view_model.with(|v| v.avatar_class.clone())>
                {move || avatar_icon(view_model.with(|v| v.avatar))}
            </div>

            <div class="message-main">
                <div class="message-header">
                    <span class="message-label">{move || view_model.with(|v| v.label)}</span>
                    <span class="message-time">{move || view_model.with(|v| v.timestamp.clone())}</span>
                    <Show when=move || view_model.with(|v| v.show_spinner)>
                        <LoaderIcon />
                    </Show>
                </div>
                <div class="message-body">
                    {move || match view_model.with(|v| v.body.clone()) {
                        Body::Text(text) => text.into_any(),
                        Body::Typing(dots) => view! { <TypingIndicator dots=dots /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Keyed list of the messages in a conversation
#[component]
pub fn MessageList(conversation: ConversationState) -> impl IntoView {
    let messages = conversation.messages();
    view! {
        <div class="messages" aria-live="polite">
            <For
                each=move || {
                    messages.with(|list| {
                        list.iter().map(|m| m.id.clone()).enumerate().collect::<Vec<_>>()
                    })
                }
                key=|(_, id): &(usize, MessageId)| id.clone()
                children=move |(index, id): (usize, MessageId)| {
                    let leaving = {
                        let id = id.clone();
                        Signal::derive(move || conversation.is_leaving(&id))
                    };
                    // A removed row keeps its last value until it unmounts
                    let message = Memo::new(move |previous: Option<&Message>| {
                        messages
                            .with(|list| list.iter().find(|m| m.id == id).cloned())
                            .or_else(|| previous.cloned())
                            .unwrap_or_else(Message::pending_reply)
                    });
                    view! { <ChatMessage message=message index=index leaving=Some(leaving) /> }
                }
            />
        </div>
    }
}

#[component]
fn TypingIndicator(dots: TypingDots) -> impl IntoView {
    view! {
        <span class="typing" role="status" aria-label="Assistant is typing">
            {dots
                .delays()
                .into_iter()
                .map(|delay| {
                    let style = format!("animation-delay: {}ms", delay.as_millis());
                    view! { <span class="typing-dot" style=style></span> }
                })
                .collect_view()}
        </span>
    }
}

fn avatar_icon(avatar: Avatar) -> AnyView {
    match avatar {
        Avatar::User => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </svg>
        }
        .into_any(),
        Avatar::Bot => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M12 8V4H8" />
                <rect width="16" height="12" x="4" y="8" rx="2" />
                <path d="M2 14h2" />
                <path d="M20 14h2" />
                <path d="M15 13v2" />
                <path d="M9 13v2" />
            </svg>
        }
        .into_any(),
    }
}

#[component]
fn LoaderIcon() -> impl IntoView {
    view! {
        <svg class="spinner" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-label="Responding">
            <path d="M21 12a9 9 0 1 1-6.219-8.56" />
        </svg>
    }
}
