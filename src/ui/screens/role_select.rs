use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Widget},
};

use crate::role::Role;
use crate::ui::centered_rect;
use crate::ui::style::ACCENT;

/// Shown when the session is authenticated but holds no role.
pub fn render_role_select(highlighted: Role, area: Rect, buf: &mut Buffer) {
    let card = centered_rect(50, 60, area);

    let items: Vec<ListItem> = Role::ALL
        .iter()
        .map(|role| {
            let profile = role.profile();
            let selected = *role == highlighted;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{} {}", profile.icon, profile.display_name), name_style),
                ]),
                Line::from(format!("    {}", profile.description)).dim(),
                Line::from(""),
            ])
        })
        .collect();

    List::new(items)
        .block(
            Block::bordered()
                .title(" Select your role ")
                .title_bottom(Line::from(" ↑/↓: Choose • Enter: Continue • q: Quit ").centered())
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(card, buf);
}
