use crate::{navigation::Section, role::Role};

use super::NavigationState;

impl NavigationState {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            section: Section::Dashboard,
            highlighted: 0,
        }
    }
}
