use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::data::schemes::{total_scholarship_value, Scheme, Scholarship, SCHEMES, SCHOLARSHIPS};
use crate::ui::style::{badge, ACCENT};

use super::{ViewContext, ViewTemplate};

#[derive(Debug)]
pub struct SchemesView;

impl ViewTemplate for SchemesView {
    fn render(&self, area: Rect, buf: &mut Buffer, _ctx: &mut ViewContext) {
        let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let title = Line::from(vec![
            Span::raw(" Available Scholarships "),
            Span::styled(
                format!("₹{} total ", format_thousands(total_scholarship_value(&SCHOLARSHIPS))),
                Style::default().fg(ACCENT),
            ),
        ]);
        let lines: Vec<Line> = SCHOLARSHIPS.iter().flat_map(scholarship_lines).collect();
        Paragraph::new(lines)
            .block(Block::bordered().border_type(BorderType::Rounded).title(title))
            .render(columns[0], buf);

        let lines: Vec<Line> = SCHEMES.iter().flat_map(scheme_lines).collect();
        Paragraph::new(lines)
            .block(Block::bordered().border_type(BorderType::Rounded).title(" Government Schemes "))
            .render(columns[1], buf);
    }
}

fn scholarship_lines(s: &Scholarship) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("🏅 {} ", s.title), Style::default().bold()),
            badge(s.status.label(), s.status.tone()),
        ]),
        Line::from(format!("  {}", s.provider)).dim(),
        Line::from(vec![
            Span::styled(format!("  {}", s.amount), Style::default().fg(Color::Green).bold()),
            Span::raw(format!("   Deadline: {}", s.deadline)),
        ]),
        Line::from(format!("  Requirements: {}", s.requirements.join(", "))).dim(),
        Line::from(format!("  {}", s.description)).italic(),
        Line::from(""),
    ]
}

fn scheme_lines(s: &Scheme) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("{} ", s.title), Style::default().bold()),
            badge(s.status.label(), s.status.tone()),
        ]),
        Line::from(format!("  {} · {}", s.provider, s.kind)).dim(),
        Line::from(format!("  {}", s.description)).italic(),
        Line::from(""),
    ]
}

/// `105000` -> `1,05,000`, Indian digit grouping.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
