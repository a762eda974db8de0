use super::ChatSession;

impl ChatSession {
    pub fn backspace(&mut self) {
        self.input.pop();
    }
}
