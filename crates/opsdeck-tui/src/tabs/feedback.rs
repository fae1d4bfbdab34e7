use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use opsdeck_core::fixtures;

use crate::app::{App, FEEDBACK_TABS, SEVERITIES};
use crate::tabs;
use crate::widgets::text_input;

/// Tab 8: feedback center — stats, the tabbed submission form, recent
/// community feedback and the roadmap preview.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // stat cards
            Constraint::Min(10),   // form + recent feedback
            Constraint::Length(5), // roadmap
        ])
        .split(area);

    let colors = [
        app.theme.accent,
        app.theme.accent_alt,
        app.theme.success,
        app.theme.error,
    ];
    let cards: Vec<_> = fixtures::feedback_stats()
        .into_iter()
        .zip(colors.iter().copied())
        .collect();
    tabs::render_stat_cards(frame, rows[0], &cards, &app.theme);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_form(frame, app, cols[0]);
    render_recent(frame, app, cols[1]);
    render_roadmap(frame, app, rows[2]);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Submit Feedback ")
        .title_bottom(" [/]: switch form | i: fill in | Enter: submit ")
        .border_style(if app.feedback.focused {
            app.theme.focus_style()
        } else {
            app.theme.border_style()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // sub-tab bar
            Constraint::Length(1), // rating / severity
            Constraint::Min(3),    // fields
        ])
        .split(inner);

    let mut bar = Vec::new();
    for (i, name) in FEEDBACK_TABS.iter().enumerate() {
        let style = if i == app.feedback.sub_tab {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            app.theme.muted_style()
        };
        bar.push(Span::styled(format!(" {name} "), style));
    }
    frame.render_widget(Paragraph::new(Line::from(bar)), rows[0]);

    match app.feedback.sub_tab {
        0 => render_general(frame, app, rows[1], rows[2]),
        1 => render_bug(frame, app, rows[1], rows[2]),
        _ => render_feature(frame, app, rows[2]),
    }
}

fn render_general(frame: &mut Frame, app: &App, meta: Rect, fields: Rect) {
    let mut stars = vec![Span::styled(" Rating (h/l): ", app.theme.muted_style())];
    for i in 1..=5u8 {
        let style = if i <= app.feedback.rating {
            Style::default().fg(app.theme.warning)
        } else {
            app.theme.muted_style()
        };
        stars.push(Span::styled("*", style));
    }
    frame.render_widget(Paragraph::new(Line::from(stars)), meta);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(fields);
    text_input::render(
        frame,
        rows[0],
        "Your Feedback",
        &app.feedback.general_text,
        "Tell us about your experience with the platform...",
        app.feedback.focused,
        false,
        &app.theme,
    );
}

fn render_bug(frame: &mut Frame, app: &App, meta: Rect, fields: Rect) {
    let mut severity = vec![Span::styled(" Severity (h/l): ", app.theme.muted_style())];
    for (i, s) in SEVERITIES.iter().enumerate() {
        let style = if i == app.feedback.severity {
            Style::default()
                .fg(app.theme.error)
                .add_modifier(Modifier::BOLD)
        } else {
            app.theme.muted_style()
        };
        severity.push(Span::styled(format!("({s}) "), style));
    }
    frame.render_widget(Paragraph::new(Line::from(severity)), meta);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(fields);
    text_input::render(
        frame,
        rows[0],
        "Bug Title",
        &app.feedback.bug_title,
        "Brief description of the bug",
        app.feedback.focused && app.feedback.field == 0,
        false,
        &app.theme,
    );
    text_input::render(
        frame,
        rows[1],
        "Steps to Reproduce",
        &app.feedback.bug_steps,
        "1. Go to... 2. Click on... 3. Expected vs actual...",
        app.feedback.focused && app.feedback.field == 1,
        false,
        &app.theme,
    );
}

fn render_feature(frame: &mut Frame, app: &App, fields: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(fields);
    text_input::render(
        frame,
        rows[0],
        "Feature Title",
        &app.feedback.feature_title,
        "What feature would you like to see?",
        app.feedback.focused && app.feedback.field == 0,
        false,
        &app.theme,
    );
    text_input::render(
        frame,
        rows[1],
        "Description",
        &app.feedback.feature_desc,
        "Describe the feature and how it would help you...",
        app.feedback.focused && app.feedback.field == 1,
        false,
        &app.theme,
    );
    text_input::render(
        frame,
        rows[2],
        "Use Case",
        &app.feedback.feature_use,
        "When and how would you use this feature?",
        app.feedback.focused && app.feedback.field == 2,
        false,
        &app.theme,
    );
}

fn render_recent(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = fixtures::recent_feedback()
        .iter()
        .map(|f| {
            let kind_color = match f.kind {
                opsdeck_core::types::FeedbackKind::BugReport => app.theme.error,
                opsdeck_core::types::FeedbackKind::FeatureRequest => app.theme.accent,
            };
            let header = Line::from(vec![
                Span::styled(
                    format!(" [{}] ", f.kind.label()),
                    Style::default().fg(kind_color),
                ),
                Span::styled(
                    format!("[{}] ", f.status.label()),
                    Style::default().fg(app.theme.feedback_status_color(f.status)),
                ),
                Span::styled(
                    format!("{} votes", f.votes),
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            let body = Line::from(vec![
                Span::raw("   "),
                Span::styled(f.title.clone(), app.theme.bold()),
                Span::styled(format!("  {}", f.age), app.theme.muted_style()),
            ]);
            ListItem::new(vec![header, body])
        })
        .collect();

    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent Community Feedback ")
                .border_style(app.theme.border_style()),
        ),
        area,
    );
}

fn render_roadmap(frame: &mut Frame, app: &App, area: Rect) {
    let columns = fixtures::roadmap();
    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Ratio(1, columns.len() as u32))
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (title, entries)) in columns.iter().enumerate() {
        let color = match *title {
            "In Progress" => app.theme.info,
            "Planned" => app.theme.warning,
            _ => app.theme.success,
        };
        let lines: Vec<Line> = entries
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::styled(" * ", Style::default().fg(color)),
                    Span::raw(*e),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} "))
                    .border_style(Style::default().fg(color)),
            ),
            cols[i],
        );
    }
}
