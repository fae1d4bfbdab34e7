//! Runtime color palette.
//!
//! Two palettes, selected by the persisted `appearance.theme` preference.
//! The dark palette assumes a dark terminal background; the light palette
//! drops to the darker ANSI shades so it stays readable on white.

use ratatui::style::{Color, Modifier, Style};

use opsdeck_core::types::{
    CredentialStatus, Difficulty, FeedbackStatus, NotificationKind, StepStatus, WorkflowStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub border: Color,
    pub bar_bg: Color,
    pub gauge_empty: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            accent_alt: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            border: Color::DarkGray,
            bar_bg: Color::DarkGray,
            gauge_empty: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            text: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            accent_alt: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(0xb0, 0x6a, 0x00),
            error: Color::Red,
            info: Color::Blue,
            border: Color::Gray,
            bar_bg: Color::Gray,
            gauge_empty: Color::Gray,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    // -- style helpers ------------------------------------------------------

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    // -- status colors ------------------------------------------------------

    pub fn step_color(&self, status: &StepStatus) -> Color {
        match status {
            StepStatus::Pending => self.muted,
            StepStatus::Running { .. } => self.info,
            StepStatus::Success => self.success,
            StepStatus::Error { .. } => self.error,
            StepStatus::Warning => self.warning,
        }
    }

    pub fn workflow_color(&self, status: &WorkflowStatus) -> Color {
        match status {
            WorkflowStatus::Running { .. } => self.info,
            WorkflowStatus::Completed => self.success,
            WorkflowStatus::Pending => self.warning,
            WorkflowStatus::Failed => self.error,
        }
    }

    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Warning => self.warning,
            NotificationKind::Info => self.info,
        }
    }

    pub fn credential_color(&self, status: CredentialStatus) -> Color {
        match status {
            CredentialStatus::Active => self.success,
            CredentialStatus::Expired => self.error,
            CredentialStatus::Unused => self.warning,
        }
    }

    pub fn difficulty_color(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Beginner => self.success,
            Difficulty::Intermediate => self.warning,
            Difficulty::Advanced => self.error,
        }
    }

    pub fn feedback_status_color(&self, status: FeedbackStatus) -> Color {
        match status {
            FeedbackStatus::InProgress => self.info,
            FeedbackStatus::Fixed => self.success,
            FeedbackStatus::Planned => self.warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("solarized").name, "dark");
    }

    #[test]
    fn error_status_is_red_in_both_palettes() {
        let failed = StepStatus::Error { message: "x".into() };
        assert_eq!(Theme::dark().step_color(&failed), Color::Red);
        assert_eq!(Theme::light().step_color(&failed), Color::Red);
    }
}
