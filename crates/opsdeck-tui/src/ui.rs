use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::app::{App, TAB_NAMES};
use crate::tabs;
use crate::widgets::{credential_form, help_modal, notif_panel, status_bar, troubleshoot};

/// Master render: header tabs, page content, status bar, then overlays and
/// effects on top.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tab bar
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    status_bar::render(frame, app, chunks[2]);

    if app.credential_form.is_some() {
        credential_form::render(frame, app);
    }
    if app.troubleshoot.is_some() {
        troubleshoot::render(frame, app);
    }
    if app.show_notifications {
        notif_panel::render(frame, app);
    }
    if app.show_help {
        help_modal::render(frame, app);
    }
    app.toasts.render(frame, chunks[1]);

    let delta = app.last_frame.elapsed();
    app.last_frame = Instant::now();
    let area = frame.area();
    app.effects.tick(delta, frame.buffer_mut(), area);
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = TAB_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Line::from(vec![
                Span::styled(
                    format!("{}", i + 1),
                    Style::default()
                        .fg(app.theme.muted)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(":"),
                Span::raw(*name),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(" opsdeck ")
                .title_style(app.theme.title_style()),
        )
        .select(app.current_tab)
        .highlight_style(
            Style::default()
                .fg(app.theme.warning)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" | "));

    frame.render_widget(tabs, area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_tab {
        0 => tabs::dashboard::render(frame, app, area),
        1 => tabs::integrations::render(frame, app, area),
        2 => tabs::chat::render(frame, app, area),
        3 => tabs::use_cases::render(frame, app, area),
        4 => tabs::pricing::render(frame, app, area),
        5 => tabs::credentials::render(frame, app, area),
        6 => tabs::support::render(frame, app, area),
        7 => tabs::feedback::render(frame, app, area),
        _ => {}
    }
}
