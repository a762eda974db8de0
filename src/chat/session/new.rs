use crate::chat::{ChatMessage, ChatState, QueryResponder};

use super::{ChatSession, Language, GREETING};

impl ChatSession {
    pub fn new() -> Self {
        Self::with_responder(QueryResponder::default())
    }

    pub fn with_responder(responder: QueryResponder) -> Self {
        Self {
            state: ChatState {
                messages: vec![ChatMessage::new_bot(GREETING)],
                ..ChatState::default()
            },
            input: String::new(),
            scroll_offset: 0,
            max_scroll: 0,
            language: Language::default(),
            quick_query_index: None,
            responder,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
