use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::data::syllabus::{
    ClassSyllabus, SubjectSyllabus, CLASS_SYLLABUS, LEARNING_GOALS, STUDENT_OVERALL_SYLLABUS,
    STUDENT_SYLLABUS,
};
use crate::data::Tone;
use crate::role::Role;
use crate::ui::style::{badge, progress_bar};

use super::{ViewContext, ViewTemplate};

#[derive(Debug)]
pub struct SyllabusView;

impl ViewTemplate for SyllabusView {
    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &mut ViewContext) {
        let (title, lines) = match ctx.role {
            Role::Student => student(),
            Role::Teacher => teacher(),
            _ => (
                Line::from(" Syllabus "),
                vec![Line::from("Syllabus tracking is available to students and teachers.").dim()],
            ),
        };

        Paragraph::new(lines)
            .block(Block::bordered().border_type(BorderType::Rounded).title(title))
            .render(area, buf);
    }
}

fn student() -> (Line<'static>, Vec<Line<'static>>) {
    let title = Line::from(vec![
        Span::raw(" My Syllabus Progress "),
        badge(&format!("{STUDENT_OVERALL_SYLLABUS}% Complete"), Tone::for_progress(STUDENT_OVERALL_SYLLABUS as f64)),
        Span::raw(" "),
    ]);

    let mut lines: Vec<Line> = STUDENT_SYLLABUS.iter().flat_map(subject_lines).collect();
    lines.push(Line::from("🎯 Learning Goals").bold());
    lines.extend(LEARNING_GOALS.iter().map(|goal| Line::from(format!("  • {goal}")).dim()));
    (title, lines)
}

fn subject_lines(subject: &SubjectSyllabus) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("{:<14}", subject.name), Style::default().bold()),
            Span::raw(format!("{}/{} chapters  ", subject.completed, subject.chapters)),
            Span::raw(format!("Next test: {}", subject.next_test)).dim(),
        ]),
        Line::from(format!("  Current Topic: {}", subject.current)),
        Line::from(vec![
            Span::raw("  "),
            progress_bar(subject.progress as f64, 30),
            Span::raw(format!(" {}%", subject.progress)),
        ]),
        Line::from(""),
    ]
}

fn teacher() -> (Line<'static>, Vec<Line<'static>>) {
    let title = Line::from(" Syllabus Tracking - My Classes ");
    (title, CLASS_SYLLABUS.iter().flat_map(class_lines).collect())
}

fn class_lines(class: &ClassSyllabus) -> Vec<Line<'static>> {
    let tone = Tone::for_progress(class.avg_progress as f64);
    vec![
        Line::from(vec![
            Span::styled(format!("{} ", class.name), Style::default().bold()),
            Span::raw(format!("👥 {} students", class.students)).dim(),
        ]),
        Line::from(format!(
            "  Chapters {}/{} • Current: {}",
            class.completed, class.chapters, class.current
        )),
        Line::from(vec![
            Span::raw("  "),
            progress_bar(class.avg_progress as f64, 30),
            Span::raw(" "),
            badge(&format!("{}% avg", class.avg_progress), tone),
        ]),
        Line::from(vec![
            Span::styled(format!("  ✔ {} on track", class.on_track), Style::default().fg(Color::Green)),
            Span::styled(format!("   ⚠ {} behind", class.behind), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ]
}
