pub mod screens;
pub mod style;
pub mod views;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};

use crate::app::{App, Screen};
use crate::ui::screens::{dashboard::render_dashboard, login::render_login, role_select::render_role_select};
use crate::ui::widgets::chat_window::ChatWindow;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::Login => render_login(self, area, buf),
            Screen::RoleSelect { highlighted } => render_role_select(highlighted, area, buf),
            Screen::Dashboard(_) => render_dashboard(self, area, buf),
        }

        if self.chat_open {
            let popup = centered_rect(60, 70, area);
            Clear.render(popup, buf);
            ChatWindow::new(&mut self.chat, self.chat_focused)
                .title(" AI Assistant · Esc to close ")
                .render(popup, buf, &mut self.throbber);
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
