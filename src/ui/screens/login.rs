use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};
use throbber_widgets_tui::Throbber;

use crate::app::App;
use crate::login::LoginField;
use crate::role::Role;
use crate::ui::centered_rect;
use crate::ui::style::{dim_unless_focused, ACCENT};

pub fn render_login(app: &mut App, area: Rect, buf: &mut Buffer) {
    let card = centered_rect(50, 80, area);
    let block = Block::bordered()
        .title(" 🎓 EduTrack AI ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .fg(ACCENT);
    let inner = block.inner(card);
    block.render(card, buf);

    let rows = Layout::vertical([
        Constraint::Length(2), // subtitle
        Constraint::Length(3), // email
        Constraint::Length(3), // password
        Constraint::Length(3), // role
        Constraint::Length(2), // role description
        Constraint::Length(3), // sign in
        Constraint::Min(1),    // demo hint
    ])
    .split(inner);

    Paragraph::new("Smart Attendance & Learning Management")
        .alignment(Alignment::Center)
        .dim()
        .render(rows[0], buf);

    let form = &app.login;
    field("Email", &form.email, "Enter your email", form.focus == LoginField::Email)
        .render(rows[1], buf);
    field(
        "Password · Ctrl-R to show",
        &form.password_display(),
        "Enter your password",
        form.focus == LoginField::Password,
    )
    .render(rows[2], buf);

    let role_focused = form.focus == LoginField::Role;
    Paragraph::new(Line::from(vec![
        Span::raw("◀ "),
        Span::styled(role_label(form.role), Style::default().bold()),
        Span::raw(" ▶"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .title(" Role ")
            .border_type(BorderType::Rounded)
            .border_style(dim_unless_focused(role_focused, Style::default())),
    )
    .render(rows[3], buf);

    Paragraph::new(form.role.profile().description)
        .alignment(Alignment::Center)
        .dim()
        .render(rows[4], buf);

    let submit_focused = form.focus == LoginField::Submit;
    let submit_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(dim_unless_focused(submit_focused, Style::default().fg(Color::Green)));
    if form.is_signing_in() {
        let inner = submit_block.inner(rows[5]);
        submit_block.render(rows[5], buf);
        let spinner = Throbber::default()
            .label("Signing in...")
            .style(Style::default().fg(Color::Green));
        StatefulWidget::render(spinner, inner, buf, &mut app.throbber);
    } else {
        Paragraph::new("Sign In · Enter")
            .alignment(Alignment::Center)
            .fg(Color::Green)
            .block(submit_block)
            .render(rows[5], buf);
    }

    let demo = app.login.role.profile().demo_credentials;
    Paragraph::new(vec![
        Line::from("Ctrl-D: Use demo login").fg(Color::Yellow),
        Line::from(format!("{} / {}", demo.email, demo.password)).dim(),
        Line::from("Tab: Next field • ←/→: Change role • Esc: Quit").dim(),
    ])
    .alignment(Alignment::Center)
    .render(rows[6], buf);
}

fn field<'a>(title: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let text = if value.is_empty() {
        Line::from(placeholder).dim()
    } else if focused {
        Line::from(format!("{value}█"))
    } else {
        Line::from(value)
    };

    Paragraph::new(text).block(
        Block::bordered()
            .title(format!(" {title} "))
            .border_type(BorderType::Rounded)
            .border_style(dim_unless_focused(focused, Style::default())),
    )
}

fn role_label(role: Role) -> String {
    let profile = role.profile();
    format!("{} {}", profile.icon, profile.display_name)
}
