use crate::chat::{ChatIntent, ChatStateMachine};

use super::ChatSession;

impl ChatSession {
    pub fn receive_reply(&mut self, reply: &str) {
        let state = std::mem::take(&mut self.state);
        let (state, _) =
            ChatStateMachine::transition(state, ChatIntent::DeliverReply(reply.to_string()));
        self.state = state;
        self.scroll_offset = 0;
    }
}
