use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Paragraph, Widget},
};

use crate::app::App;
use crate::data::summary::welcome_message;
use crate::navigation::NavigationState;
use crate::ui::style::ACCENT;
use crate::ui::views::{get_view, ViewContext};
use crate::log_error;

pub fn render_dashboard(app: &mut App, area: Rect, buf: &mut Buffer) {
    let Some(nav) = app.navigation().cloned() else {
        return;
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(1)])
        .split(main_layout[1]);

    render_header(&nav, main_layout[0], buf);
    render_sidebar(&nav, !app.chat_focused, content_layout[0], buf);

    let descriptor = nav.current_view();
    let Some(view) = get_view(descriptor.view) else {
        log_error!("No view registered for {:?}", descriptor.view);
        return;
    };

    let mut ctx = ViewContext {
        role: nav.role(),
        chat: &mut app.chat,
        chat_focused: app.chat_focused && !app.chat_open,
        throbber: &mut app.throbber,
    };
    view.render(content_layout[1], buf, &mut ctx);

    let help_text = if app.chat_focused {
        "Enter: Send • Tab: Quick query • Ctrl-L: Language • Ctrl-U: Clear • PgUp/PgDn: Scroll • Esc: Leave chat"
    } else {
        view.controls()
    };
    Paragraph::new(help_text)
        .block(
            Block::bordered()
                .title("Controls")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow)
        .alignment(Alignment::Center)
        .render(main_layout[2], buf);
}

fn render_header(nav: &NavigationState, area: Rect, buf: &mut Buffer) {
    let profile = nav.role().profile();
    let columns = Layout::horizontal([Constraint::Min(1), Constraint::Length(34)]).split(area);

    Paragraph::new(vec![
        Line::from(profile.dashboard_title).bold(),
        Line::from(welcome_message(nav.role())).dim(),
    ])
    .block(Block::bordered().border_type(BorderType::Rounded).fg(ACCENT))
    .render(columns[0], buf);

    Paragraph::new(vec![
        Line::from(Span::styled("📡 RFID Online", Style::default().fg(Color::Green).bold())),
        Line::from("s: Switch Role • 🔔 Notifications").dim(),
    ])
    .alignment(Alignment::Right)
    .block(Block::bordered().border_type(BorderType::Rounded))
    .render(columns[1], buf);
}

fn render_sidebar(nav: &NavigationState, focused: bool, area: Rect, buf: &mut Buffer) {
    let profile = nav.role().profile();
    let current = profile.nav_position(nav.section());

    let items: Vec<ListItem> = profile
        .nav_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut style = Style::default();
            if Some(i) == current {
                style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
            }
            if focused && i == nav.highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(format!(" {} {}", item.icon, item.title))).style(style)
        })
        .collect();

    let title = format!(" {} {} ", profile.icon, profile.portal_title);
    List::new(items)
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .border_style(crate::ui::style::dim_unless_focused(focused, Style::default())),
        )
        .render(area, buf);
}
