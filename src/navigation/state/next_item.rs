use super::NavigationState;

impl NavigationState {
    pub fn next_item(&mut self) {
        let count = self.role.profile().nav_items.len();
        if count == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % count;
    }
}
