use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// Progress bar glyphs. Exposed so list renderers can inline a bar without
/// owning a layout area.
pub fn bar_string(progress: u8, width: usize) -> String {
    let progress = progress.min(100) as usize;
    let filled = width * progress / 100;
    let mut s = String::with_capacity(width * 3);
    for _ in 0..filled {
        s.push('\u{2588}'); // █
    }
    for _ in filled..width {
        s.push('\u{2591}'); // ░
    }
    s
}

/// One-line labelled gauge: `label ████░░░░  65%`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    progress: u8,
    color: Color,
    theme: &Theme,
) {
    if area.height == 0 {
        return;
    }
    let progress = progress.min(100);
    let pct = format!(" {:>3}%", progress);
    let label = if label.is_empty() {
        String::new()
    } else {
        format!("{label} ")
    };

    let bar_width = (area.width as usize).saturating_sub(label.len() + pct.len());
    if bar_width == 0 {
        return;
    }
    let filled = bar_width * progress as usize / 100;

    let line = Line::from(vec![
        Span::styled(label, theme.text_style()),
        Span::styled("\u{2588}".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "\u{2591}".repeat(bar_width - filled),
            Style::default().fg(theme.gauge_empty),
        ),
        Span::styled(pct, theme.muted_style()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
