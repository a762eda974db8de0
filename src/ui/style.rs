use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Span;

use crate::data::Tone;

pub const ACCENT: Color = Color::Cyan;

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
        Tone::Neutral => Color::Gray,
    }
}

/// `[label]` badge in the tone's colour
pub fn badge(label: &str, tone: Tone) -> Span<'static> {
    Span::styled(format!("[{label}]"), Style::default().fg(tone_color(tone)).bold())
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(percent: f64, width: usize) -> Span<'static> {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    Span::styled(bar, Style::default().fg(tone_color(Tone::for_progress(percent))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_width() {
        let bar = progress_bar(64.0, 10);
        assert_eq!(bar.content.chars().count(), 10);
        assert_eq!(bar.content.chars().filter(|c| *c == '█').count(), 6);
        assert_eq!(bar.style.fg, Some(Color::Yellow));
        assert_eq!(progress_bar(140.0, 4).content, "████");
    }
}
