use crate::log_debug;

use super::ChatSession;

impl ChatSession {
    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        log_debug!("Chat language set to {}", self.language.code());
    }
}
