use crate::{log_debug, navigation::Section};

use super::NavigationState;

impl NavigationState {
    /// Replace the current section. No allow-list check happens here; the router falls back
    /// for sections the role cannot open.
    pub fn select(&mut self, section: impl Into<Section>) {
        let section = section.into();
        log_debug!("Navigation [{}]: {} -> {}", self.role, self.section, section);

        if let Some(position) = self.role.profile().nav_position(&section) {
            self.highlighted = position;
        }
        self.section = section;
    }
}
