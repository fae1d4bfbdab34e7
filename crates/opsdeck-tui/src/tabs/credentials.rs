use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use opsdeck_core::catalog;
use opsdeck_core::types::{CredentialStatus, StatCard};

use crate::app::App;
use crate::tabs;

/// Tab 6: the credential vault — stat cards, the table, and the security
/// practices panel. Deletion is real (in memory); adding is a stub dialog.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    render_stats(frame, app, rows[0]);
    render_table(frame, app, rows[1]);
    render_practices(frame, app, rows[2]);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let active = app
        .credentials
        .iter()
        .filter(|c| c.status == CredentialStatus::Active)
        .count();
    let unused = app
        .credentials
        .iter()
        .filter(|c| c.status == CredentialStatus::Unused)
        .count();
    let cards = vec![
        (
            StatCard {
                title: "Total Credentials".into(),
                value: app.credentials.len().to_string(),
                change: "Stored securely".into(),
            },
            app.theme.accent,
        ),
        (
            StatCard {
                title: "Active".into(),
                value: active.to_string(),
                change: "Recently used".into(),
            },
            app.theme.success,
        ),
        (
            StatCard {
                title: "Unused".into(),
                value: unused.to_string(),
                change: "Need attention".into(),
            },
            app.theme.warning,
        ),
        (
            StatCard {
                title: "Services".into(),
                value: catalog::distinct_services(&app.credentials).to_string(),
                change: "Integrated".into(),
            },
            app.theme.accent_alt,
        ),
    ];
    tabs::render_stat_cards(frame, area, &cards, &app.theme);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Service"),
        Cell::from("Type"),
        Cell::from("Status"),
        Cell::from("Last Used"),
    ])
    .style(
        Style::default()
            .fg(app.theme.warning)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .credentials
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let status_color = app.theme.credential_color(c.status);
            let row = Row::new(vec![
                Cell::from(c.name.clone()),
                Cell::from(c.service.clone()),
                Cell::from(c.kind.clone()),
                Cell::from(c.status.label())
                    .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD)),
                Cell::from(c.last_used.format("%Y-%m-%d %H:%M").to_string()),
            ]);
            if i == app.selected_index {
                row.style(app.theme.selected_style())
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Length(9),
        Constraint::Length(17),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Stored Credentials ")
            .title_bottom(" a: add | d: delete ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(table, area);

    if app.credentials.is_empty() {
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 2,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No credentials stored.",
                app.theme.muted_style(),
            )),
            inner,
        );
    }
}

fn render_practices(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(" * Rotate credentials regularly (every 90 days)"),
            Line::from(" * Remove unused credentials immediately"),
        ])
        .style(app.theme.muted_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Credential Management ")
                .border_style(Style::default().fg(app.theme.warning)),
        ),
        cols[0],
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(" * AES-256 encryption for stored credentials"),
            Line::from(" * Audit logs for all credential operations"),
        ])
        .style(app.theme.muted_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Security Features ")
                .border_style(Style::default().fg(app.theme.warning)),
        ),
        cols[1],
    );
}
