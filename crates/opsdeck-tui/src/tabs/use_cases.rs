use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::widgets::text_input;

/// Tab 4: the use-case library — searchable template list with a detail
/// panel for the selection.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_row(frame, app, rows[0]);

    let filtered = app.filtered_templates();
    if filtered.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No templates found", app.theme.bold())),
            Line::from(Span::styled(
                "Try adjusting your search criteria or browse all templates. (c clears filters)",
                app.theme.muted_style(),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Use Case Library ")
                .border_style(app.theme.border_style()),
        );
        frame.render_widget(empty, rows[1]);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_template_list(frame, app, cols[0], &filtered);
    render_template_detail(frame, app, cols[1], &filtered);
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
        &app.templates_query,
        "Search templates... (/)",
        app.search_focused && app.current_tab == 3,
        false,
        &app.theme,
    );

    let mut spans = vec![Span::raw(" ")];
    for (i, cat) in app.template_categories.iter().enumerate() {
        let style = if i == app.templates_category {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            app.theme.muted_style()
        };
        spans.push(Span::styled(format!(" {cat} "), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Category (h/l) ")
                .border_style(app.theme.border_style()),
        ),
        cols[1],
    );
}

fn render_template_list(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    filtered: &[&opsdeck_core::types::Template],
) {
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut header = vec![Span::styled(format!(" {}", t.title), app.theme.bold())];
            if t.featured {
                header.push(Span::styled(
                    " *Featured*",
                    Style::default()
                        .fg(app.theme.warning)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            let meta = Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    t.difficulty.label(),
                    Style::default().fg(app.theme.difficulty_color(t.difficulty)),
                ),
                Span::styled(format!("  {}", t.duration), app.theme.muted_style()),
            ]);
            let item = ListItem::new(vec![Line::from(header), meta]);
            if i == app.selected_index {
                item.style(app.theme.selected_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Templates ({}) ", filtered.len()))
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(list, area);
}

fn render_template_detail(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    filtered: &[&opsdeck_core::types::Template],
) {
    let detail: Vec<Line> = if let Some(t) = filtered.get(app.selected_index) {
        let mut lines = vec![
            Line::from(Span::styled(t.title.clone(), app.theme.title_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Difficulty: ", app.theme.bold()),
                Span::styled(
                    t.difficulty.label(),
                    Style::default().fg(app.theme.difficulty_color(t.difficulty)),
                ),
            ]),
            Line::from(vec![
                Span::styled("Duration: ", app.theme.bold()),
                Span::raw(t.duration.clone()),
            ]),
            Line::from(""),
            Line::from(Span::raw(t.description.clone())),
            Line::from(""),
            Line::from(Span::styled("Required Tools:", app.theme.bold())),
        ];
        let tools = t
            .tools
            .iter()
            .map(|tool| format!("[{tool}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            tools,
            Style::default().fg(app.theme.accent),
        )));
        lines
    } else {
        vec![Line::from("No template selected")]
    };

    let panel = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Detail ")
                .border_style(app.theme.border_style()),
        );
    frame.render_widget(panel, area);
}
