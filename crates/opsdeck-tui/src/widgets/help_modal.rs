use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::widgets::centered_rect;

/// Centered keybinding reference, toggled with `?`.
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, area);

    let heading = Style::default()
        .fg(app.theme.warning)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("  Keybindings", heading)),
        Line::from(""),
    ];
    let entries: &[(&str, &str)] = &[
        ("1-8", "Jump to page"),
        ("Tab / Shift-Tab", "Next / previous page"),
        ("j / k", "Move down / up"),
        ("h / l", "Cycle category, plan or sub-tab"),
        ("Enter", "Open / toggle / submit"),
        ("/", "Search (Integrations, Use Cases)"),
        ("i", "Focus input / form"),
        (":", "Command mode (:go <route>, :query state)"),
        ("n", "Notifications"),
        ("T / L", "Cycle theme / language"),
        ("a / d", "Add / delete credential"),
        ("t", "Troubleshoot failed step (detail view)"),
        ("R / e", "Rerun / edit step (detail view)"),
        ("C", "Clear chat history"),
        ("Esc", "Close view, dialog or input"),
        ("q / Ctrl-c", "Quit"),
    ];
    for (keys, what) in entries {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{keys:<18}"),
                Style::default()
                    .fg(app.theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(*what),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press ? or Esc to close",
        app.theme.muted_style(),
    )));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(app.theme.focus_style()),
    );
    frame.render_widget(modal, area);
}
