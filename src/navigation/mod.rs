mod section;
mod state;

pub use section::Section;
pub use state::NavigationState;
