use crate::chat::{ChatIntent, ChatStateMachine};
use crate::log_debug;

use super::ChatSession;

impl ChatSession {
    /// Append the typed query and pick its reply.
    ///
    /// Returns `None` for a blank input. Otherwise the caller owns delivering
    /// the returned text after the reply delay via [`ChatSession::receive_reply`].
    pub fn submit(&mut self) -> Option<&'static str> {
        if self.input.trim().is_empty() {
            return None;
        }

        let query = std::mem::take(&mut self.input);
        let reply = self.responder.respond(&query);

        let state = std::mem::take(&mut self.state);
        let (state, _) = ChatStateMachine::transition(state, ChatIntent::Submit(query));
        let (state, events) = ChatStateMachine::transition(state, ChatIntent::BeginComposing);
        self.state = state;

        log_debug!("Chat submit, events: {:?}", events);

        self.quick_query_index = None;
        self.scroll_offset = 0;
        Some(reply)
    }
}
