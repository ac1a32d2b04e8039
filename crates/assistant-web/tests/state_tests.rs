//! Conversation State Tests

use assistant_web::ConversationState;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_start_over_marks_only_messages_on_screen() {
    Owner::new().with(|| {
        let state = ConversationState::new();
        let request = state.push_user("Draft me an NDA");
        let reply = state.begin_reply();
        state.finish(&reply);

        state.start_over();
        let fresh = state.push_user("Actually, a lease");

        assert!(state.is_leaving(&request));
        assert!(state.is_leaving(&reply));
        assert!(!state.is_leaving(&fresh));
        assert_eq!(state.messages().get_untracked().len(), 3);
    });
}

#[wasm_bindgen_test]
fn test_start_over_on_empty_conversation_is_a_no_op() {
    Owner::new().with(|| {
        let state = ConversationState::new();
        state.start_over();
        assert!(state.is_empty());
    });
}
