use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use opsdeck_core::fixtures;

use crate::app::{App, CredentialField};
use crate::widgets::{centered_rect, text_input};

/// "Add credential" dialog. Collects a name, service, type and secret value;
/// saving closes the dialog and discards the input — nothing is stored, in
/// the demo or anywhere else.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(form) = &app.credential_form else {
        return;
    };

    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Add New Credential ")
        .title_bottom(" Tab: next field | h/l: pick | Enter: save | Esc: cancel ")
        .border_style(app.theme.focus_style());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(2), // service
            Constraint::Length(2), // type
            Constraint::Length(3), // value
            Constraint::Min(0),    // notice
        ])
        .split(inner);

    text_input::render(
        frame,
        rows[0],
        "Credential Name",
        &form.name,
        "e.g., Production Docker Registry",
        form.field == CredentialField::Name,
        false,
        &app.theme,
    );

    render_picker(
        frame,
        rows[1],
        "Service",
        fixtures::credential_services()[form.service_idx],
        form.field == CredentialField::Service,
        app,
    );
    render_picker(
        frame,
        rows[2],
        "Credential Type",
        fixtures::credential_kinds()[form.kind_idx],
        form.field == CredentialField::Kind,
        app,
    );

    text_input::render(
        frame,
        rows[3],
        "Credential Value",
        &form.value,
        "Enter your credential value",
        form.field == CredentialField::Value,
        true,
        &app.theme,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Demo console: saved credentials are discarded.",
            app.theme.muted_style(),
        ))),
        rows[4],
    );
}

fn render_picker(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    label: &str,
    value: &str,
    focused: bool,
    app: &App,
) {
    let style = if focused {
        app.theme.focus_style()
    } else {
        app.theme.text_style()
    };
    let line = Line::from(vec![
        Span::styled(format!("{label}: "), app.theme.muted_style()),
        Span::styled(format!("< {value} >"), style),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default()), area);
}
