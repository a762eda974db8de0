// src/chat/state.rs
use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// Where a chat turn is. `UserSubmitted` lasts only until the reply is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChatPhase {
    #[default]
    Idle,
    UserSubmitted,
    BotComposing,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatState {
    /// Append-only, in submission order
    pub messages: Vec<ChatMessage>,
    pub phase: ChatPhase,
    /// Replies scheduled but not yet delivered
    pub pending_replies: usize,
}

// ----------------------------------------------------------------------------
// INTENT - what the user (or the reply timer) wants to happen
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ChatIntent {
    Submit(String),
    BeginComposing,
    DeliverReply(String),
}

// ----------------------------------------------------------------------------
// EVENTS - things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChatEvent {
    MessageAppended { message: ChatMessage, total: usize },
    PhaseChanged { from: ChatPhase, to: ChatPhase },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct ChatStateMachine;

impl ChatStateMachine {
    pub fn transition(state: ChatState, intent: ChatIntent) -> (ChatState, Vec<ChatEvent>) {
        use ChatIntent::*;

        match intent {
            Submit(text) => Self::handle_submit(state, text),
            BeginComposing => Self::handle_begin_composing(state),
            DeliverReply(text) => Self::handle_deliver_reply(state, text),
        }
    }

    fn handle_submit(state: ChatState, text: String) -> (ChatState, Vec<ChatEvent>) {
        if text.trim().is_empty() {
            return (state, vec![]);
        }

        let (mut state, mut events) = Self::append(state, ChatMessage::new_user(text));
        events.extend(Self::set_phase(&mut state, ChatPhase::UserSubmitted));
        (state, events)
    }

    fn handle_begin_composing(mut state: ChatState) -> (ChatState, Vec<ChatEvent>) {
        state.pending_replies += 1;
        let events = Self::set_phase(&mut state, ChatPhase::BotComposing)
            .into_iter()
            .collect();
        (state, events)
    }

    fn handle_deliver_reply(state: ChatState, text: String) -> (ChatState, Vec<ChatEvent>) {
        let (mut state, mut events) = Self::append(state, ChatMessage::new_bot(text));

        state.pending_replies = state.pending_replies.saturating_sub(1);
        let next = if state.pending_replies == 0 {
            ChatPhase::Idle
        } else {
            ChatPhase::BotComposing
        };
        events.extend(Self::set_phase(&mut state, next));
        (state, events)
    }

    fn append(mut state: ChatState, message: ChatMessage) -> (ChatState, Vec<ChatEvent>) {
        state.messages.push(message.clone());
        let total = state.messages.len();
        (state, vec![ChatEvent::MessageAppended { message, total }])
    }

    fn set_phase(state: &mut ChatState, to: ChatPhase) -> Option<ChatEvent> {
        let from = state.phase;
        if from == to {
            return None;
        }
        state.phase = to;
        Some(ChatEvent::PhaseChanged { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;

    fn run(state: ChatState, intents: Vec<ChatIntent>) -> ChatState {
        intents
            .into_iter()
            .fold(state, |state, intent| ChatStateMachine::transition(state, intent).0)
    }

    #[test]
    fn test_full_turn_returns_to_idle() {
        let (state, events) =
            ChatStateMachine::transition(ChatState::default(), ChatIntent::Submit("hi".into()));
        assert_eq!(state.phase, ChatPhase::UserSubmitted);
        assert_eq!(events.len(), 2);

        let (state, _) = ChatStateMachine::transition(state, ChatIntent::BeginComposing);
        assert_eq!(state.phase, ChatPhase::BotComposing);
        assert_eq!(state.pending_replies, 1);

        let (state, events) =
            ChatStateMachine::transition(state, ChatIntent::DeliverReply("hello".into()));
        assert_eq!(state.phase, ChatPhase::Idle);
        assert_eq!(state.pending_replies, 0);
        assert!(matches!(
            events.last(),
            Some(ChatEvent::PhaseChanged { from: ChatPhase::BotComposing, to: ChatPhase::Idle })
        ));
        assert_eq!(state.messages[1].sender, Sender::Bot);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let (state, events) =
            ChatStateMachine::transition(ChatState::default(), ChatIntent::Submit("   \t".into()));
        assert!(events.is_empty());
        assert!(state.messages.is_empty());
        assert_eq!(state.phase, ChatPhase::Idle);
    }

    #[test]
    fn test_stays_composing_until_last_reply() {
        let state = run(
            ChatState::default(),
            vec![
                ChatIntent::Submit("one".into()),
                ChatIntent::BeginComposing,
                ChatIntent::Submit("two".into()),
                ChatIntent::BeginComposing,
                ChatIntent::DeliverReply("first".into()),
            ],
        );
        assert_eq!(state.phase, ChatPhase::BotComposing);
        assert_eq!(state.pending_replies, 1);

        let state = run(state, vec![ChatIntent::DeliverReply("second".into())]);
        assert_eq!(state.phase, ChatPhase::Idle);
    }

    #[test]
    fn test_appending_never_reorders_or_drops() {
        let mut state = ChatState::default();
        for i in 0..250 {
            let before: Vec<String> = state.messages.iter().map(|m| m.id.clone()).collect();
            let intent = if i % 2 == 0 {
                ChatIntent::Submit(format!("message {i}"))
            } else {
                ChatIntent::DeliverReply(format!("reply {i}"))
            };
            state = ChatStateMachine::transition(state, intent).0;

            assert_eq!(state.messages.len(), before.len() + 1);
            let prefix: Vec<String> =
                state.messages[..before.len()].iter().map(|m| m.id.clone()).collect();
            assert_eq!(prefix, before);
        }
        assert_eq!(state.messages[0].content, "message 0");
        assert_eq!(state.messages[249].content, "reply 249");
    }

    #[test]
    fn test_events_serialize_with_tag() {
        let (_, events) =
            ChatStateMachine::transition(ChatState::default(), ChatIntent::BeginComposing);
        let json = serde_json::to_string(&events[0]).unwrap();
        assert!(json.contains("\"type\":\"PhaseChanged\""));
    }
}
