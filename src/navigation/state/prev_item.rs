use super::NavigationState;

impl NavigationState {
    pub fn prev_item(&mut self) {
        let count = self.role.profile().nav_items.len();
        if count == 0 {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            count - 1
        } else {
            self.highlighted - 1
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::role::Role;
    use super::*;

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut nav = NavigationState::new(Role::Teacher);
        let count = Role::Teacher.profile().nav_items.len();

        nav.prev_item();
        assert_eq!(nav.highlighted, count - 1);

        nav.next_item();
        assert_eq!(nav.highlighted, 0);
    }

    #[test]
    fn test_moving_cursor_does_not_change_section() {
        let mut nav = NavigationState::new(Role::SchoolAdmin);
        nav.next_item();
        nav.next_item();
        assert_eq!(nav.section().id(), "dashboard");
    }
}
