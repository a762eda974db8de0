use super::{ChatSession, QUICK_QUERIES};

impl ChatSession {
    /// Load the next quick query into the input line, replacing what was typed.
    pub fn cycle_quick_query(&mut self, direction: i32) {
        let len = QUICK_QUERIES.len() as i32;
        let index = match self.quick_query_index {
            None if direction >= 0 => 0,
            None => len - 1,
            Some(index) if direction >= 0 => (index as i32 + 1) % len,
            Some(index) => (index as i32 - 1 + len) % len,
        } as usize;

        self.quick_query_index = Some(index);
        self.input = QUICK_QUERIES[index].to_string();
    }
}

#[cfg(test)]
mod tests {
    use crate::chat::{ChatSession, QUICK_QUERIES};

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut session = ChatSession::new();
        session.input = "half typed".to_string();

        session.cycle_quick_query(1);
        assert_eq!(session.input, QUICK_QUERIES[0]);

        for _ in 0..QUICK_QUERIES.len() {
            session.cycle_quick_query(1);
        }
        assert_eq!(session.input, QUICK_QUERIES[0]);

        session.cycle_quick_query(-1);
        assert_eq!(session.input, QUICK_QUERIES[3]);
    }

    #[test]
    fn test_typing_detaches_from_quick_query() {
        let mut session = ChatSession::new();
        session.cycle_quick_query(1);
        session.handle_input('!');
        assert_eq!(session.quick_query_index, None);
        assert_eq!(session.input, format!("{}!", QUICK_QUERIES[0]));
    }
}
