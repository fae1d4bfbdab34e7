use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};
use ratatui::Frame;

use opsdeck_core::catalog;

use crate::app::App;
use crate::widgets::centered_rect;

/// Notification overlay, toggled with `n`. Enter marks the selected entry
/// read; the unread badge in the status bar follows.
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(55, 60, frame.area());
    frame.render_widget(Clear, area);

    let unread = catalog::unread_count(&app.notifications);

    let items: Vec<ListItem> = app
        .notifications
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let color = app.theme.notification_color(n.kind);
            let title_style = if n.read {
                app.theme.muted_style()
            } else {
                app.theme.bold()
            };
            let mut header = vec![
                Span::styled(
                    format!(" {} ", n.kind.glyph()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(n.title.clone(), title_style),
            ];
            if !n.read {
                header.push(Span::styled(" *", Style::default().fg(app.theme.accent)));
            }
            let detail = Line::from(vec![
                Span::raw("   "),
                Span::styled(n.message.clone(), app.theme.muted_style()),
                Span::styled(
                    format!("  {}", n.timestamp.format("%H:%M:%S")),
                    app.theme.muted_style(),
                ),
            ]);
            let item = ListItem::new(vec![Line::from(header), detail]);
            if i == app.notif_selected {
                item.style(app.theme.selected_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Notifications ({unread} unread) "))
            .title_bottom(" Enter: mark read | Esc: close ")
            .border_style(app.theme.focus_style()),
    );
    frame.render_widget(list, area);
}
