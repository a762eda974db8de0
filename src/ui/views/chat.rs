use ratatui::prelude::*;

use crate::ui::widgets::chat_window::ChatWindow;

use super::{ViewContext, ViewTemplate};

#[derive(Debug)]
pub struct ChatView;

impl ViewTemplate for ChatView {
    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &mut ViewContext) {
        ChatWindow::new(&mut *ctx.chat, ctx.chat_focused).render(area, buf, ctx.throbber);
    }

    fn controls(&self) -> &'static str {
        "c: Type a message • ↑/↓: Navigate • Enter: Open • s: Switch role • q: Quit"
    }
}
