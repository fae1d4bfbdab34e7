use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use opsdeck_core::fixtures;
use opsdeck_core::types::{ChatMessage, ChatRole};

use crate::app::App;
use crate::widgets::text_input;

/// Tab 3: the chat console — message thread plus a side panel with quick
/// actions, quick-start prompts and recent templates.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(area);

    let chat_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(cols[0]);

    render_thread(
        frame,
        chat_rows[0],
        " AI Workflow Assistant ",
        &app.messages,
        app,
    );
    text_input::render(
        frame,
        chat_rows[1],
        "Prompt",
        &app.chat_input,
        "Ask me anything about your workflows... (i to type)",
        app.chat_focused,
        false,
        &app.theme,
    );

    render_side_panel(frame, app, cols[1]);
}

/// Message thread renderer, shared with the workflow detail chat.
pub fn render_thread(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    messages: &[ChatMessage],
    app: &App,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(" i: type | Enter: send | C: clear ")
        .border_style(app.theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if messages.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No messages. Press i and say hello.",
                app.theme.muted_style(),
            ))),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for m in messages {
        let color = match m.role {
            ChatRole::User => app.theme.accent,
            ChatRole::Assistant => app.theme.accent_alt,
            ChatRole::System => app.theme.muted,
        };
        let mut header = vec![
            Span::styled(
                m.sender_label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", m.timestamp.format("%H:%M:%S")),
                app.theme.muted_style(),
            ),
        ];
        if let Some(wf) = &m.workflow_ref {
            header.push(Span::styled(
                format!("  [{wf}]"),
                Style::default().fg(app.theme.warning),
            ));
        }
        lines.push(Line::from(header));
        for text_line in m.content.lines() {
            lines.push(Line::from(Span::raw(text_line.to_string())));
        }
        lines.push(Line::from(""));
    }

    // Pin the latest messages to the bottom of the viewport.
    let height = inner.height as usize;
    let scroll = lines.len().saturating_sub(height) as u16;
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        inner,
    );
}

fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(6),
        ])
        .split(area);

    let actions = ["Start New Workflow", "Debug Last Deployment", "Save Chat as Template"];
    let items: Vec<ListItem> = actions
        .iter()
        .map(|a| ListItem::new(Line::from(format!(" > {a}"))))
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quick Actions ")
                .border_style(app.theme.border_style()),
        ),
        rows[0],
    );

    let items: Vec<ListItem> = fixtures::quick_prompts()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let style = if i == app.quick_prompt_idx % fixtures::quick_prompts().len() {
                app.theme.text_style()
            } else {
                app.theme.muted_style()
            };
            ListItem::new(Line::from(Span::styled(format!(" {p}"), style)))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quick Prompts ")
                .title_bottom(" p: use next ")
                .border_style(app.theme.border_style()),
        ),
        rows[1],
    );

    let items: Vec<ListItem> = fixtures::recent_templates()
        .iter()
        .map(|t| ListItem::new(Line::from(format!(" {t}"))))
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent Templates ")
                .border_style(app.theme.border_style()),
        ),
        rows[2],
    );
}
