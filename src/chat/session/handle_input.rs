use super::ChatSession;

impl ChatSession {
    pub fn handle_input(&mut self, ch: char) {
        self.input.push(ch);
        self.quick_query_index = None;
    }
}
