use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::data::todays_work::{count_with_status, WorkItem, WorkStatus, TODAYS_WORK};
use crate::ui::style::{badge, ACCENT};
use crate::util::string::StringUtils;

use super::{ViewContext, ViewTemplate};

#[derive(Debug)]
pub struct TodaysWorkView;

impl ViewTemplate for TodaysWorkView {
    fn render(&self, area: Rect, buf: &mut Buffer, _ctx: &mut ViewContext) {
        let done = count_with_status(&TODAYS_WORK, WorkStatus::Completed);
        let title = Line::from(vec![
            Span::raw(" Today's Work "),
            Span::styled(
                format!("{} • {} done ", StringUtils::maybe_pluralize_count(TODAYS_WORK.len(), ("class", "classes")), done),
                Style::default().fg(ACCENT),
            ),
        ]);

        let lines: Vec<Line> = TODAYS_WORK.iter().flat_map(work_lines).collect();

        Paragraph::new(lines)
            .block(Block::bordered().border_type(BorderType::Rounded).title(title))
            .render(area, buf);
    }
}

fn work_lines(work: &WorkItem) -> Vec<Line<'static>> {
    let mut details = vec![
        Span::raw(format!("  👥 {}", work.class)),
        Span::raw(format!("   🕒 {}", work.time)),
    ];
    if let Some(attendance) = work.attendance {
        details.push(Span::raw(format!("   ✔ {attendance}")));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("📖 {} ", work.subject), Style::default().bold()),
            badge(work.status.label(), work.status.tone()),
        ]),
        Line::from(format!("  {}", work.topic)).dim(),
        Line::from(details).dim(),
    ];
    if work.status == WorkStatus::InProgress {
        lines.push(Line::from("  ✎ Quick notes and uploads open for this class").italic());
    }
    lines.push(Line::from(""));
    lines
}
