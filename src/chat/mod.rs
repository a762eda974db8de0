//! Scripted "AI Assistant": a keyword responder plus the chat transcript around it.

pub mod message;
pub mod responder;
pub mod session;
pub mod state;

pub use message::{ChatMessage, Sender};
pub use responder::{QueryResponder, ResponseRule};
pub use session::{ChatSession, Language, QUICK_QUERIES};
pub use state::{ChatEvent, ChatIntent, ChatPhase, ChatState, ChatStateMachine};
