use super::ChatSession;

impl ChatSession {
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.quick_query_index = None;
    }
}
