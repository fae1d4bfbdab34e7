use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::strings;
use crate::widgets::{centered_rect, text_input};

/// Remediation dialog for a failed pipeline step: AI retry, manual edit, or
/// a free-text prompt fix. None of the three does anything real — they reset
/// the step to running and close.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(step_idx) = app.troubleshoot else {
        return;
    };
    let Some(step) = app.steps.get(step_idx) else {
        return;
    };

    let lang = app.prefs.language.interface_language.as_str();
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} - {} ", strings::lookup(lang, "troubleshoot.title"), step.name))
        .title_bottom(" j/k: choose | Enter: apply | Esc: close ")
        .border_style(Style::default().fg(app.theme.error));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // description
            Constraint::Length(3), // error details
            Constraint::Length(2), // option: ai retry
            Constraint::Length(2), // option: manual edit
            Constraint::Length(2), // option: prompt fix
            Constraint::Length(3), // prompt input
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            strings::lookup(lang, "troubleshoot.description"),
            app.theme.muted_style(),
        ))),
        rows[0],
    );

    let error_text = step.status.error_message().unwrap_or("(no error details)");
    frame.render_widget(
        Paragraph::new(error_text)
            .style(Style::default().fg(app.theme.error))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Error Details ")
                    .border_style(app.theme.border_style()),
            ),
        rows[1],
    );

    let options = [
        ("troubleshoot.ai_retry", "troubleshoot.ai_retry_desc"),
        ("troubleshoot.manual_edit", "troubleshoot.manual_edit_desc"),
        ("troubleshoot.prompt_fix", "troubleshoot.prompt_fix_desc"),
    ];
    for (i, (name_key, desc_key)) in options.iter().enumerate() {
        let marker = if i == app.troubleshoot_choice { ">" } else { " " };
        let name_style = if i == app.troubleshoot_choice {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            app.theme.text_style()
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {marker} "), name_style),
                Span::styled(strings::lookup(lang, name_key), name_style),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(strings::lookup(lang, desc_key), app.theme.muted_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), rows[2 + i]);
    }

    text_input::render(
        frame,
        rows[5],
        strings::lookup(lang, "troubleshoot.prompt_fix"),
        &app.troubleshoot_prompt,
        &format!("Fix the {} configuration issue by...", step.name),
        app.troubleshoot_prompt_focused,
        false,
        &app.theme,
    );
}
