use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use opsdeck_core::fixtures;

use crate::app::App;

/// Tab 5: billing metrics, the four plan cards, add-on packs and policies.
/// Everything here is copy; h/l only moves the highlight.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // billing metrics
            Constraint::Min(12),    // plan cards
            Constraint::Length(3),  // add-on packs
            Constraint::Length(4),  // policies
        ])
        .split(area);

    render_metrics(frame, app, rows[0]);
    render_plans(frame, app, rows[1]);
    render_addons(frame, app, rows[2]);
    render_policies(frame, app, rows[3]);
}

fn render_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let prompt = Paragraph::new(vec![Line::from(Span::styled(
        "A single, top-level user command that initiates a workflow.",
        app.theme.muted_style(),
    ))])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Prompt ")
            .border_style(Style::default().fg(app.theme.accent)),
    );
    frame.render_widget(prompt, cols[0]);

    let quick_fix = Paragraph::new(vec![Line::from(Span::styled(
        "One automated remediation action by our self-healing architecture.",
        app.theme.muted_style(),
    ))])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Quick Fix ")
            .border_style(Style::default().fg(app.theme.success)),
    );
    frame.render_widget(quick_fix, cols[1]);
}

fn render_plans(frame: &mut Frame, app: &App, area: Rect) {
    let plans = fixtures::pricing_plans();
    let constraints: Vec<Constraint> = plans
        .iter()
        .map(|_| Constraint::Ratio(1, plans.len() as u32))
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, plan) in plans.iter().enumerate() {
        let selected = i == app.plan_index;
        let border = if plan.featured {
            Style::default().fg(app.theme.accent_alt)
        } else if selected {
            app.theme.focus_style()
        } else {
            app.theme.border_style()
        };
        let title = if plan.featured {
            format!(" {} (Most Popular) ", plan.name)
        } else {
            format!(" {} ", plan.name)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                plan.price.clone(),
                app.theme.title_style(),
            )),
            Line::from(Span::styled(plan.duration.clone(), app.theme.muted_style())),
        ];
        if let Some(yearly) = &plan.yearly_price {
            lines.push(Line::from(Span::styled(
                yearly.clone(),
                Style::default().fg(app.theme.accent),
            )));
        }
        lines.push(Line::from(""));
        for feature in &plan.features {
            lines.push(Line::from(vec![
                Span::styled("+ ", Style::default().fg(app.theme.success)),
                Span::raw(feature.clone()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", plan.cta),
            if selected {
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                app.theme.muted_style()
            },
        )));

        let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border),
        );
        frame.render_widget(card, cols[i]);
    }
}

fn render_addons(frame: &mut Frame, app: &App, area: Rect) {
    let packs = fixtures::addon_packs();
    let constraints: Vec<Constraint> = packs
        .iter()
        .map(|_| Constraint::Ratio(1, packs.len() as u32))
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, pack) in packs.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("{} ", pack.price), app.theme.title_style()),
            Span::styled(pack.description.clone(), app.theme.muted_style()),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", pack.name))
                    .border_style(app.theme.border_style()),
            ),
            cols[i],
        );
    }
}

fn render_policies(frame: &mut Frame, app: &App, area: Rect) {
    let (payment, upgrades) = fixtures::billing_policies();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let payment_lines: Vec<Line> = payment
        .iter()
        .map(|p| Line::from(format!(" * {p}")))
        .collect();
    frame.render_widget(
        Paragraph::new(payment_lines)
            .style(app.theme.muted_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Payment & Billing ")
                    .border_style(app.theme.border_style()),
            ),
        cols[0],
    );

    let upgrade_lines: Vec<Line> = upgrades
        .iter()
        .map(|p| Line::from(format!(" * {p}")))
        .collect();
    frame.render_widget(
        Paragraph::new(upgrade_lines)
            .style(app.theme.muted_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Upgrades & Changes ")
                    .border_style(app.theme.border_style()),
            ),
        cols[1],
    );
}
