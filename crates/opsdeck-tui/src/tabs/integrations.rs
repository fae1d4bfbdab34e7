use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use opsdeck_core::catalog;

use crate::app::App;
use crate::widgets::text_input;

/// Tab 2: the tool catalog — search, category filter, per-category counters
/// and the connect/disconnect switch.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // summary badges
            Constraint::Length(3), // search + categories
            Constraint::Length(3), // category stats
            Constraint::Min(4),    // tool list
            Constraint::Length(4), // integration guide
        ])
        .split(area);

    render_badges(frame, app, rows[0]);
    render_filter_row(frame, app, rows[1]);
    render_category_stats(frame, app, rows[2]);
    render_tool_list(frame, app, rows[3]);
    render_guide(frame, app, rows[4]);
}

fn render_badges(frame: &mut Frame, app: &App, area: Rect) {
    let connected = catalog::connected_count(&app.integrations);
    let available = app.integrations.len() - connected;
    let line = Line::from(vec![
        Span::styled(" Tool Integrations ", app.theme.title_style()),
        Span::styled(
            format!(" {connected} Connected "),
            Style::default()
                .fg(app.theme.success)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {available} Available "),
            Style::default().fg(app.theme.warning),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_filter_row(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    text_input::render(
        frame,
        cols[0],
        "Search",
        &app.integrations_query,
        "Search tools... (/)",
        app.search_focused && app.current_tab == 1,
        false,
        &app.theme,
    );

    let mut spans = vec![Span::raw(" ")];
    for (i, cat) in app.integration_categories.iter().enumerate() {
        let style = if i == app.integrations_category {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            app.theme.muted_style()
        };
        spans.push(Span::styled(format!(" {cat} "), style));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Category (h/l) ")
        .border_style(app.theme.border_style());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), cols[1]);
}

fn render_category_stats(frame: &mut Frame, app: &App, area: Rect) {
    // Skip the leading "All" pseudo-category.
    let categories: Vec<&String> = app.integration_categories.iter().skip(1).collect();
    if categories.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = categories
        .iter()
        .map(|_| Constraint::Ratio(1, categories.len() as u32))
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, category) in categories.iter().enumerate() {
        let (connected, total) = catalog::category_counts(&app.integrations, category);
        let color = if connected > 0 {
            app.theme.success
        } else {
            app.theme.muted
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {category} "))
            .border_style(app.theme.border_style());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{connected}/{total}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .block(block),
            cols[i],
        );
    }
}

fn render_tool_list(frame: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered_integrations();

    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let (r, g, b) = t.color;
            let brand = Color::Rgb(r, g, b);
            let conn = if t.connected {
                Span::styled(
                    " [connected]",
                    Style::default()
                        .fg(app.theme.success)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(" [connect?]", app.theme.muted_style())
            };
            let header = Line::from(vec![
                Span::styled(format!(" {} ", t.icon), Style::default().fg(brand)),
                Span::styled(t.name.clone(), app.theme.bold()),
                Span::styled(format!("  {}", t.category), app.theme.muted_style()),
                conn,
            ]);
            let desc = Line::from(vec![
                Span::raw("   "),
                Span::styled(t.description.clone(), app.theme.muted_style()),
            ]);
            let item = ListItem::new(vec![header, desc]);
            if i == app.selected_index {
                item.style(app.theme.selected_style())
            } else {
                item
            }
        })
        .collect();

    let title = format!(" Tools ({}) ", filtered.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(" Enter/Space: toggle connection ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(list, area);

    if filtered.is_empty() {
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No tools match the current filters.",
                app.theme.muted_style(),
            )),
            inner,
        );
    }
}

fn render_guide(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let quick = Paragraph::new(vec![
        Line::from(Span::raw(" * Toggle the switch to connect any tool instantly")),
        Line::from(Span::raw(" * Connected tools appear automatically in workflows")),
    ])
    .style(app.theme.muted_style())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Quick Setup ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(quick, cols[0]);

    let security = Paragraph::new(vec![
        Line::from(Span::raw(" * End-to-end encryption for all credentials")),
        Line::from(Span::raw(" * Zero-trust architecture with role-based access")),
    ])
    .style(app.theme.muted_style())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Security & Compliance ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(security, cols[1]);
}
