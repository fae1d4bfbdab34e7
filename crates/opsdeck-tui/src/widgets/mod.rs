pub mod credential_form;
pub mod gauge;
pub mod help_modal;
pub mod notif_panel;
pub mod status_bar;
pub mod text_input;
pub mod toast;
pub mod troubleshoot;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centered sub-rectangle sized as a percentage of the parent, shared by the
/// modal overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(parent);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
