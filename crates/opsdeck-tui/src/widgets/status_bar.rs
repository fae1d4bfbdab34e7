use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use opsdeck_core::catalog;

use crate::app::App;

/// Bottom line: key hints and live badges on the left, clock on the right.
/// Command mode takes the line over entirely, mirroring the `:` prompt of
/// the command system; a pending command result is shown until the next key.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.in_command_mode {
        let line = Line::from(vec![
            Span::styled(":", Style::default().fg(app.theme.accent)),
            Span::raw(app.command_buffer.clone()),
            Span::styled("\u{2588}", Style::default().fg(app.theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if let Some(result) = &app.command_result {
        let mut text = result.replace('\n', " ");
        let max = area.width.saturating_sub(2) as usize;
        if text.width() > max {
            text.truncate(text.char_indices().nth(max).map_or(text.len(), |(i, _)| i));
        }
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, app.theme.muted_style()))),
            area,
        );
        return;
    }

    let active = app
        .workflows
        .iter()
        .filter(|w| w.status.label() == "running")
        .count();
    let completed = app
        .workflows
        .iter()
        .filter(|w| w.status.label() == "completed")
        .count();
    let unread = catalog::unread_count(&app.notifications);

    let hint = Style::default().fg(app.theme.warning);
    let mut left = vec![
        Span::styled("[?]", hint),
        Span::raw(" Help  "),
        Span::styled("[n]", hint),
        Span::raw(" Notifications  "),
        Span::styled("[:]", hint),
        Span::raw(" Command  "),
        Span::styled("[q]", hint),
        Span::raw(" Quit  "),
        Span::styled(
            format!("{active} active"),
            Style::default().fg(app.theme.info),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{completed} completed"),
            Style::default().fg(app.theme.success),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{unread} unread"),
            Style::default().fg(if unread > 0 {
                app.theme.error
            } else {
                app.theme.muted
            }),
        ),
    ];

    let right = format!(
        "{}/{}  {}",
        app.theme.name,
        app.prefs.language.interface_language,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    // Pad between the two halves; ratatui has no split alignment in one line.
    let left_width: usize = left.iter().map(|s| s.content.width()).sum();
    let total = area.width as usize;
    let padding = total.saturating_sub(left_width + right.width()).max(1);
    left.push(Span::raw(" ".repeat(padding)));
    left.push(Span::styled(right, app.theme.muted_style()));

    let bar = Paragraph::new(Line::from(left)).style(
        Style::default()
            .bg(app.theme.bar_bg)
            .fg(app.theme.text),
    );
    frame.render_widget(bar, area);
}
