use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, BorderType, List, ListItem, Paragraph},
};

use crate::data::{
    attendance::{best_day, max_present, monthly_average, weekly_average},
    summary::{chart_title, recent_activity, summary_for},
    ActivityKind, StatCard, Tone, MONTHLY_TRENDS, WEEKLY_ATTENDANCE,
};
use crate::role::Role;
use crate::ui::style::{badge, progress_bar, tone_color, ACCENT};

use super::{ViewContext, ViewTemplate};

#[derive(Debug)]
pub struct DashboardView;

impl ViewTemplate for DashboardView {
    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &mut ViewContext) {
        let rows = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(6),
        ])
        .split(area);

        render_stats(ctx.role, rows[0], buf);

        let middle = Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(rows[1]);
        render_attendance(ctx.role, middle[0], buf);
        render_quick_actions(ctx.role, middle[1], buf);

        render_activity(ctx.role, rows[2], buf);
    }
}

fn render_stats(role: Role, area: Rect, buf: &mut Buffer) {
    let cards = summary_for(role).stats;
    let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (card, cell) in cards.iter().zip(cells.iter()) {
        stat_card(card).render(*cell, buf);
    }
}

fn stat_card(card: &StatCard) -> Paragraph<'static> {
    let value_style = Style::default().fg(tone_color(card.tone)).bold();
    Paragraph::new(vec![
        Line::from(card.label).dim(),
        Line::from(Span::styled(card.value, value_style)),
    ])
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", card.icon)),
    )
}

fn render_attendance(role: Role, area: Rect, buf: &mut Buffer) {
    let average = weekly_average(&WEEKLY_ATTENDANCE);
    let title = Line::from(vec![
        Span::raw(format!(" {} ", chart_title(role))),
        badge(&format!("{average:.1}% Average"), Tone::Success),
        Span::raw(" "),
    ]);
    let block = Block::bordered().border_type(BorderType::Rounded).title(title);
    let inner = block.inner(area);
    block.render(area, buf);

    let columns = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let bars: Vec<(&str, u64)> = WEEKLY_ATTENDANCE
        .iter()
        .map(|day| (day.day, day.present as u64))
        .collect();
    BarChart::default()
        .block(Block::default().title("This Week's Attendance").title_style(Style::default().dim()))
        .data(bars.as_slice())
        .max(max_present(&WEEKLY_ATTENDANCE) as u64)
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green))
        .render(columns[0], buf);

    let mut lines = vec![
        Line::from(format!("Monthly Trends · {:.1}% avg", monthly_average(&MONTHLY_TRENDS))).dim(),
    ];
    for month in &MONTHLY_TRENDS {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<4}", month.month)),
            progress_bar(month.attendance, 12),
            Span::raw(format!(" {:.1}%", month.attendance)),
        ]));
    }
    if let Some(best) = best_day(&WEEKLY_ATTENDANCE) {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Best day: {} ({} present)", best.day, best.present)));
    }
    Paragraph::new(lines).render(columns[1], buf);
}

fn render_quick_actions(role: Role, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = role
        .profile()
        .quick_actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let key = Span::styled(format!("[{}] ", i + 1), Style::default().fg(ACCENT).bold());
            let label = if action.target.is_some() {
                Span::raw(format!("{} {}", action.icon, action.label))
            } else {
                Span::raw(format!("{} {}", action.icon, action.label)).dim()
            };
            ListItem::new(Line::from(vec![key, label]))
        })
        .collect();

    let title = Line::from(vec![Span::raw(" Quick Actions "), badge("Active", Tone::Neutral)]);
    let list = List::new(items)
        .block(Block::bordered().border_type(BorderType::Rounded).title(title));
    Widget::render(list, area, buf);
}

fn render_activity(role: Role, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = recent_activity(role)
        .iter()
        .map(|activity| {
            let dot_color = match activity.kind {
                ActivityKind::Success => Color::Green,
                ActivityKind::Info => ACCENT,
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(dot_color)),
                Span::raw(activity.event),
                Span::raw(format!("  {}", activity.time)).dim(),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().border_type(BorderType::Rounded).title(" Recent Activity "));
    Widget::render(list, area, buf);
}
