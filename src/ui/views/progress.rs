use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Gauge, Paragraph},
};

use crate::data::progress::{
    overall_progress, CURRENT_GPA, DAYS_PRESENT, SEMESTER_ATTENDANCE, ACHIEVEMENTS, STUDENT_PROGRESS,
};
use crate::data::Tone;
use crate::ui::style::{badge, progress_bar, tone_color};

use super::{ViewContext, ViewTemplate};

#[derive(Debug)]
pub struct ProgressView;

impl ViewTemplate for ProgressView {
    fn render(&self, area: Rect, buf: &mut Buffer, _ctx: &mut ViewContext) {
        let overall = overall_progress(&STUDENT_PROGRESS);

        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(5),
        ])
        .split(area);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Academic Progress ", Style::default().bold()),
                badge(&format!("Overall: {overall:.1}%"), Tone::Success),
            ]),
            Line::from("Track your performance across subjects").dim(),
        ])
        .render(rows[0], buf);

        let cards = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!(" Overall Performance · GPA {CURRENT_GPA} ")),
            )
            .gauge_style(Style::default().fg(tone_color(Tone::for_progress(overall))))
            .ratio(overall / 100.0)
            .label(format!("{overall:.1}% Complete"))
            .render(cards[0], buf);

        let (present, total) = DAYS_PRESENT;
        Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!(" Attendance Summary · {present}/{total} days ")),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(SEMESTER_ATTENDANCE / 100.0)
            .label(format!("{SEMESTER_ATTENDANCE:.1}% Attendance"))
            .render(cards[1], buf);

        let subjects: Vec<Line> = STUDENT_PROGRESS
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::styled(format!("{:<12}", s.subject), Style::default().bold()),
                    Span::raw(format!("{:<3} ", s.grade)),
                    progress_bar(s.progress as f64, 24),
                    Span::raw(format!(" {}%", s.progress)),
                    Span::raw(format!("   Last Test: {}%", s.last_test)).dim(),
                ])
            })
            .collect();
        Paragraph::new(subjects)
            .block(Block::bordered().border_type(BorderType::Rounded).title(" Subject-wise Progress "))
            .render(rows[2], buf);

        let achievements: Vec<Line> = ACHIEVEMENTS
            .iter()
            .map(|a| Line::from(format!("{} {} · {}", a.icon, a.title, a.context)))
            .collect();
        Paragraph::new(achievements)
            .block(Block::bordered().border_type(BorderType::Rounded).title(" Recent Achievements "))
            .render(rows[3], buf);
    }
}
