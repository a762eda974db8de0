use crate::router::{SectionRouter, ViewDescriptor};

use super::NavigationState;

impl NavigationState {
    pub fn current_view(&self) -> ViewDescriptor {
        SectionRouter::resolve(self.role, &self.section)
    }
}
