mod new;
mod select;
mod next_item;
mod prev_item;
mod highlighted_item;
mod select_highlighted;
mod current_view;

use crate::{navigation::Section, role::Role};

/// Where the user is inside the dashboard.
///
/// The role is fixed at construction; only the section and the sidebar cursor move.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    role: Role,
    section: Section,
    /// Index into the role's `nav_items`
    pub highlighted: usize,
}

impl NavigationState {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn section(&self) -> &Section {
        &self.section
    }
}
