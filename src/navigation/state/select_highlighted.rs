use super::NavigationState;

impl NavigationState {
    pub fn select_highlighted(&mut self) {
        let section = self.highlighted_item().section.clone();
        self.select(section);
    }
}
