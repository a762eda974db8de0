use crate::role::NavItem;

use super::NavigationState;

impl NavigationState {
    pub fn highlighted_item(&self) -> &'static NavItem {
        let items = self.role.profile().nav_items;
        &items[self.highlighted.min(items.len() - 1)]
    }
}
