use super::ChatSession;

impl ChatSession {
    pub fn scroll_up(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll);
    }
}
