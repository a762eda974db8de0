mod new;
mod handle_input;
mod backspace;
mod clear_input;
mod submit;
mod receive_reply;
mod scroll_up;
mod scroll_down;
mod cycle_quick_query;
mod cycle_language;
mod language;

pub use language::Language;

use super::responder::QueryResponder;
use super::state::ChatState;

pub const GREETING: &str = "Hello! I'm your AI assistant. I can help you with government schemes, \
scholarships, and educational queries. You can ask me in English, Hindi, or other regional languages.";

pub const QUICK_QUERIES: [&str; 4] = [
    "Show me scholarship opportunities",
    "Government education schemes",
    "Financial aid programs",
    "My attendance summary",
];

/// Chat transcript plus the input line and view state around it
#[derive(Debug)]
pub struct ChatSession {
    pub state: ChatState,
    pub input: String,
    /// Lines scrolled up from the newest message; 0 follows the tail
    pub scroll_offset: usize,
    /// Largest useful `scroll_offset`, recorded each time the transcript is drawn
    pub max_scroll: usize,
    pub language: Language,
    pub quick_query_index: Option<usize>,
    responder: QueryResponder,
}

impl ChatSession {
    pub fn is_composing(&self) -> bool {
        self.state.pending_replies > 0
    }
}
