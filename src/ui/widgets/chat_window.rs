use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::chat::{ChatMessage, ChatSession, Sender, QUICK_QUERIES};
use crate::ui::style::dim_unless_focused;

/// Transcript, typing indicator and input line for a [`ChatSession`].
///
/// Drawing records the transcript's scroll range on the session so scrolling stays in bounds.
pub struct ChatWindow<'a> {
    chat: &'a mut ChatSession,
    focused: bool,
    title: &'a str,
}

impl<'a> ChatWindow<'a> {
    pub fn new(chat: &'a mut ChatSession, focused: bool) -> Self {
        Self { chat, focused, title: " AI Assistant " }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl StatefulWidget for ChatWindow<'_> {
    type State = ThrobberState;

    fn render(self, area: Rect, buf: &mut Buffer, throbber: &mut ThrobberState) {
        let chat = self.chat;
        let language = format!(" {} · Ctrl-L ", chat.language.native_name());
        let block = Block::bordered()
            .title(self.title)
            .title_top(Line::from(language).right_aligned())
            .border_type(BorderType::Rounded)
            .border_style(dim_unless_focused(self.focused, Style::default().fg(Color::Cyan)));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(inner);

        render_transcript(chat, layout[0], buf);

        if chat.is_composing() {
            let spinner = Throbber::default()
                .label("Assistant is typing...")
                .style(Style::default().fg(Color::Green).italic())
                .throbber_style(Style::default().fg(Color::Green).bold());
            StatefulWidget::render(spinner, layout[1], buf, throbber);
        } else {
            let hint = match chat.quick_query_index {
                Some(index) => format!("Quick query {}/{} · Tab for next", index + 1, QUICK_QUERIES.len()),
                None => "Tab: quick queries · Enter: send · PgUp/PgDn: scroll".to_string(),
            };
            Paragraph::new(hint).dim().render(layout[1], buf);
        }

        let input = if chat.input.is_empty() {
            Line::from(chat.language.placeholder()).dim()
        } else if self.focused {
            Line::from(format!("{}█", chat.input))
        } else {
            Line::from(chat.input.as_str())
        };
        Paragraph::new(input)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(dim_unless_focused(self.focused, Style::default())),
            )
            .render(layout[2], buf);
    }
}

fn render_transcript(chat: &mut ChatSession, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = chat.state.messages.iter().flat_map(message_lines).collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    let max_scroll = paragraph.line_count(area.width).saturating_sub(area.height as usize);
    chat.max_scroll = max_scroll;
    chat.scroll_offset = chat.scroll_offset.min(max_scroll);
    let top = max_scroll - chat.scroll_offset;

    paragraph.scroll((top as u16, 0)).render(area, buf);
}

fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let (who, color) = match message.sender {
        Sender::User => ("You", Color::Cyan),
        Sender::Bot => ("Assistant", Color::Green),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" · {}", message.display_time()), Style::default().fg(Color::DarkGray)),
    ])];
    lines.extend(message.content.lines().map(|raw| Line::from(format!("  {raw}"))));
    lines.push(Line::from(""));
    lines
}
