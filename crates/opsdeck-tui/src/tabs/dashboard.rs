use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, DETAIL_SUBTABS};
use crate::tabs::{self, chat};
use crate::widgets::{gauge, text_input};

/// Tab 1: stat cards, workflow list and connected-tool summary, or the
/// pipeline detail view when a workflow is opened.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.workflow_detail.is_some() {
        render_detail(frame, app, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let colors = [
        app.theme.success,
        app.theme.info,
        app.theme.accent_alt,
        app.theme.warning,
    ];
    let cards: Vec<_> = app
        .stats
        .iter()
        .cloned()
        .zip(colors.iter().copied())
        .collect();
    tabs::render_stat_cards(frame, rows[0], &cards, &app.theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_workflows(frame, app, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body[1]);
    render_connected_tools(frame, app, side[0]);
    render_quick_actions(frame, app, side[1]);
}

fn render_workflows(frame: &mut Frame, app: &App, area: Rect) {
    let bar_width = (area.width as usize).saturating_sub(12).clamp(8, 32);

    let items: Vec<ListItem> = app
        .workflows
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let color = app.theme.workflow_color(&w.status);
            let progress = w.status.progress();
            let header = Line::from(vec![
                Span::styled(
                    format!(" {} ", w.status.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(w.name.clone(), app.theme.bold()),
                Span::styled(format!("  {}", w.duration), app.theme.muted_style()),
            ]);
            let bar = Line::from(vec![
                Span::raw("   "),
                Span::styled(gauge::bar_string(progress, bar_width), Style::default().fg(color)),
                Span::styled(format!(" {progress:>3}%"), app.theme.muted_style()),
            ]);
            // Step chips light up as the progress crosses each quarter.
            let reached = (progress / 25) as usize;
            let mut chips = vec![Span::raw("   ")];
            for (n, step) in w.steps.iter().enumerate() {
                let style = if n < reached {
                    Style::default().fg(app.theme.accent)
                } else {
                    app.theme.muted_style()
                };
                chips.push(Span::styled(format!("[{step}] "), style));
            }
            let item = ListItem::new(vec![header, bar, Line::from(chips)]);
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
            .title(" Active Workflows ")
            .title_bottom(" Enter: pipeline detail ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(list, area);
}

fn render_connected_tools(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .integrations
        .iter()
        .filter(|t| t.connected)
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", t.icon), app.theme.bold()),
                Span::raw(t.name.clone()),
                Span::styled("  connected", Style::default().fg(app.theme.success)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Connected Tools ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(list, area);
}

fn render_quick_actions(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = opsdeck_core::fixtures::quick_actions()
        .iter()
        .map(|a| ListItem::new(Line::from(format!(" > {a}"))))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Quick Actions ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Pipeline detail view
// ---------------------------------------------------------------------------

const COLLAPSED_HEIGHT: u16 = 3;
const EXPANDED_HEIGHT: u16 = 12;

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(workflow) = app.workflow_detail.and_then(|i| app.workflows.get(i)) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = vec![
        Line::from(vec![
            Span::styled(workflow.name.clone(), app.theme.title_style()),
            Span::styled("  pipeline detail", app.theme.muted_style()),
        ]),
        Line::from(Span::styled(
            " j/k: step | Enter: expand | h/l: sub-tab | R: rerun | t: troubleshoot | Esc: back",
            app.theme.muted_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(header), rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    render_steps(frame, app, body[0]);
    render_workflow_chat(frame, app, body[1]);
}

fn render_steps(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints: Vec<Constraint> = app
        .steps
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if app.detail_expanded.get(i).copied().unwrap_or(false) {
                Constraint::Length(EXPANDED_HEIGHT)
            } else {
                Constraint::Length(COLLAPSED_HEIGHT)
            }
        })
        .collect();
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, step) in app.steps.iter().enumerate() {
        render_step_panel(frame, app, slots[i], i, step);
    }
}

fn render_step_panel(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    index: usize,
    step: &opsdeck_core::types::WorkflowStep,
) {
    let color = app.theme.step_color(&step.status);
    let selected = index == app.detail_selected;
    let border = if selected {
        app.theme.focus_style()
    } else {
        app.theme.border_style()
    };
    let expanded = app.detail_expanded.get(index).copied().unwrap_or(false);
    let marker = if expanded { "v" } else { ">" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(vec![
            Span::raw(format!(" {marker} ")),
            Span::styled(step.name.clone(), app.theme.bold()),
            Span::styled(
                format!(" [{}] ", step.status.label().to_uppercase()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !expanded {
        if let Some(progress) = step.status.progress() {
            gauge::render(frame, inner, "", progress, color, &app.theme);
        }
        return;
    }

    let mut zones = vec![Constraint::Length(1)]; // status / gauge line
    zones.push(Constraint::Length(1)); // sub-tab bar
    zones.push(Constraint::Min(0)); // content
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints(zones)
        .split(inner);

    if let Some(progress) = step.status.progress() {
        gauge::render(frame, parts[0], "", progress, color, &app.theme);
    } else if let Some(message) = step.status.error_message() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(app.theme.error),
            ))),
            parts[0],
        );
    }

    let mut bar = Vec::new();
    for (n, name) in DETAIL_SUBTABS.iter().enumerate() {
        let style = if n == app.detail_subtab {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            app.theme.muted_style()
        };
        bar.push(Span::styled(format!(" {name} "), style));
        bar.push(Span::raw("|"));
    }
    bar.pop();
    frame.render_widget(Paragraph::new(Line::from(bar)), parts[1]);

    let content: Vec<Line> = match app.detail_subtab {
        0 => step
            .commands
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::styled("$ ", app.theme.muted_style()),
                    Span::raw(c.clone()),
                ])
            })
            .collect(),
        1 => {
            let mut lines: Vec<Line> = step
                .logs
                .iter()
                .map(|l| {
                    Line::from(vec![
                        Span::styled("- ", app.theme.muted_style()),
                        Span::raw(l.clone()),
                    ])
                })
                .collect();
            if step.status.is_running() {
                lines.push(Line::from(Span::styled(
                    "* Live output...",
                    Style::default().fg(app.theme.info),
                )));
            }
            lines
        }
        _ => step
            .metadata
            .iter()
            .map(|(k, v)| {
                Line::from(vec![
                    Span::styled(format!("{k}: "), app.theme.muted_style()),
                    Span::raw(v.clone()),
                ])
            })
            .collect(),
    };
    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), parts[2]);
}

fn render_workflow_chat(frame: &mut Frame, app: &App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    chat::render_thread(
        frame,
        parts[0],
        " Workflow Assistant ",
        &app.detail_chat,
        app,
    );
    text_input::render(
        frame,
        parts[1],
        "Message",
        &app.detail_input,
        "Modify workflow, add tools, or ask questions...",
        app.detail_chat_focused,
        false,
        &app.theme,
    );
}
