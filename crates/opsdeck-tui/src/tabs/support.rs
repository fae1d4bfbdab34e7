use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use opsdeck_core::fixtures;

use crate::app::{App, SupportForm};
use crate::widgets::text_input;

/// Tab 7: support center — FAQ accordion, contact form, documentation links
/// and the system status row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // faq + contact form
            Constraint::Length(4), // doc links
            Constraint::Length(3), // system status
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    render_faq(frame, app, cols[0]);
    render_contact_form(frame, app, cols[1]);
    render_doc_links(frame, app, rows[1]);
    render_system_status(frame, app, rows[2]);
}

fn render_faq(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .faqs
        .iter()
        .enumerate()
        .map(|(i, faq)| {
            let open = app.faq_open.get(i).copied().unwrap_or(false);
            let marker = if open { "v" } else { ">" };
            let mut lines = vec![Line::from(vec![
                Span::styled(format!(" {marker} "), app.theme.muted_style()),
                Span::styled(faq.question.clone(), app.theme.bold()),
            ])];
            if open {
                // Rough wrap; List items don't reflow on their own.
                let width = (area.width as usize).saturating_sub(6).max(20);
                for chunk in wrap_text(&faq.answer, width) {
                    lines.push(Line::from(vec![
                        Span::raw("   "),
                        Span::styled(chunk, app.theme.muted_style()),
                    ]));
                }
            }
            let item = ListItem::new(lines);
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
            .title(" Frequently Asked Questions ")
            .title_bottom(" Enter: expand ")
            .border_style(app.theme.border_style()),
    );
    frame.render_widget(list, area);
}

fn render_contact_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Contact Support ")
        .title_bottom(" i: fill in | Tab: next field | Enter: send ")
        .border_style(if app.support_form.focused {
            app.theme.focus_style()
        } else {
            app.theme.border_style()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let placeholders = [
        "Your name",
        "your@email.com",
        "Brief description of your issue",
        "Describe your issue in detail...",
    ];
    for (i, label) in SupportForm::LABELS.iter().enumerate() {
        text_input::render(
            frame,
            rows[i],
            label,
            &app.support_form.fields[i],
            placeholders[i],
            app.support_form.focused && app.support_form.field == i,
            false,
            &app.theme,
        );
    }
}

fn render_doc_links(frame: &mut Frame, app: &App, area: Rect) {
    let links = fixtures::doc_links();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Documentation & Resources ")
        .border_style(app.theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let per_row = 3;
    let mut lines = Vec::new();
    for chunk in links.chunks(per_row) {
        let mut spans = Vec::new();
        for link in chunk {
            spans.push(Span::styled(
                format!(" {} ", link.title),
                Style::default().fg(app.theme.accent),
            ));
            spans.push(Span::styled(
                format!("({})  ", link.category),
                app.theme.muted_style(),
            ));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_system_status(frame: &mut Frame, app: &App, area: Rect) {
    let services = fixtures::system_status();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" System Status ")
        .border_style(Style::default().fg(app.theme.success));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for s in &services {
        spans.push(Span::styled(
            " * ",
            Style::default()
                .fg(app.theme.success)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(s.service.clone()));
        spans.push(Span::styled(
            format!(" {}  ", s.uptime),
            app.theme.muted_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Greedy word wrap for accordion answers.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::wrap_text;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn single_long_word_stays_whole() {
        let lines = wrap_text("supercalifragilistic", 5);
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap_text("", 10).is_empty());
    }
}
