// src/ui/views/mod.rs
use ratatui::prelude::*;
use std::collections::HashMap;
use std::fmt::Debug;
use throbber_widgets_tui::ThrobberState;

use crate::chat::ChatSession;
use crate::role::Role;
use crate::router::View;

pub mod chat;
pub mod dashboard;
pub mod progress;
pub mod schemes;
pub mod syllabus;
pub mod todays_work;

/// What a view may read while drawing
pub struct ViewContext<'a> {
    pub role: Role,
    pub chat: &'a mut ChatSession,
    pub chat_focused: bool,
    pub throbber: &'a mut ThrobberState,
}

/// Every dashboard content view implements this
pub trait ViewTemplate: Send + Sync + Debug {
    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &mut ViewContext);
    /// Footer hint while the view is showing
    fn controls(&self) -> &'static str {
        "↑/↓: Navigate • Enter: Open • 1-3: Quick actions • c: Chat • s: Switch role • q: Quit"
    }
}

/// Factory type
pub type ViewFactory = fn() -> Box<dyn ViewTemplate>;

lazy_static::lazy_static! {
    pub static ref VIEW_REGISTRY: HashMap<View, ViewFactory> = {
        let mut map = HashMap::new();

        map.insert(View::Dashboard, dashboard_factory as ViewFactory);
        map.insert(View::TodaysWork, todays_work_factory as ViewFactory);
        map.insert(View::Syllabus, syllabus_factory as ViewFactory);
        map.insert(View::Progress, progress_factory as ViewFactory);
        map.insert(View::Schemes, schemes_factory as ViewFactory);
        map.insert(View::Chat, chat_factory as ViewFactory);

        map
    };
}

fn dashboard_factory() -> Box<dyn ViewTemplate> {
    Box::new(dashboard::DashboardView)
}

fn todays_work_factory() -> Box<dyn ViewTemplate> {
    Box::new(todays_work::TodaysWorkView)
}

fn syllabus_factory() -> Box<dyn ViewTemplate> {
    Box::new(syllabus::SyllabusView)
}

fn progress_factory() -> Box<dyn ViewTemplate> {
    Box::new(progress::ProgressView)
}

fn schemes_factory() -> Box<dyn ViewTemplate> {
    Box::new(schemes::SchemesView)
}

fn chat_factory() -> Box<dyn ViewTemplate> {
    Box::new(chat::ChatView)
}

/// Helper to get a view instance
pub fn get_view(view: View) -> Option<Box<dyn ViewTemplate>> {
    VIEW_REGISTRY.get(&view).map(|&factory| factory())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_is_registered() {
        for view in [
            View::Dashboard,
            View::TodaysWork,
            View::Syllabus,
            View::Progress,
            View::Schemes,
            View::Chat,
        ] {
            assert!(get_view(view).is_some(), "{view:?} missing");
        }
    }

    #[test]
    fn test_every_view_renders_for_every_role() {
        let mut chat = ChatSession::new();
        let area = Rect::new(0, 0, 100, 40);

        for (view, factory) in VIEW_REGISTRY.iter() {
            for role in Role::ALL {
                let mut buf = Buffer::empty(area);
                let mut throbber = ThrobberState::default();
                let mut ctx = ViewContext { role, chat: &mut chat, chat_focused: false, throbber: &mut throbber };
                factory().render(area, &mut buf, &mut ctx);
                assert!(
                    buf.content().iter().any(|cell| cell.symbol() != " "),
                    "{view:?} drew nothing for {role}"
                );
            }
        }
    }
}
