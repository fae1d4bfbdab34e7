use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MAX_TOASTS: usize = 4;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;
const DEFAULT_LIFETIME: Duration = Duration::from_secs(3);

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn color(self) -> Color {
        match self {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Success => Color::Green,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            ToastLevel::Info => "i",
            ToastLevel::Success => "+",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "x",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created: Instant,
    lifetime: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created: Instant::now(),
            lifetime: DEFAULT_LIFETIME,
        }
    }

    #[allow(dead_code)]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn expired(&self) -> bool {
        self.created.elapsed() >= self.lifetime
    }
}

/// Bottom-right toast stack. Newest on the bottom, oldest evicted beyond the
/// cap, expired ones swept on each `tick`.
#[derive(Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Info));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Warning));
    }

    pub fn tick(&mut self) {
        self.toasts.retain(|t| !t.expired());
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[allow(dead_code)]
    pub fn latest_message(&self) -> Option<&str> {
        self.toasts.last().map(|t| t.message.as_str())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let y_offset = (i as u16 + 1) * TOAST_HEIGHT;
            if y_offset > area.height {
                break;
            }
            let rect = Rect::new(
                area.x + area.width.saturating_sub(width),
                area.y + area.height.saturating_sub(y_offset),
                width,
                TOAST_HEIGHT,
            );
            frame.render_widget(Clear, rect);

            let color = toast.level.color();
            let line = Line::from(vec![
                Span::styled(
                    format!("[{}] ", toast.level.tag()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(toast.message.as_str()),
            ]);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            frame.render_widget(Paragraph::new(line).block(block), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_lifetime_expires_immediately() {
        let t = Toast::new("gone", ToastLevel::Info).with_lifetime(Duration::ZERO);
        assert!(t.expired());
        assert!(!Toast::new("alive", ToastLevel::Success).expired());
    }

    #[test]
    fn stack_is_capped() {
        let mut mgr = ToastManager::new();
        for i in 0..MAX_TOASTS + 3 {
            mgr.info(format!("toast {i}"));
        }
        assert_eq!(mgr.len(), MAX_TOASTS);
        // The oldest were evicted, the newest survives.
        assert_eq!(mgr.latest_message(), Some("toast 6"));
    }

    #[test]
    fn tick_sweeps_expired() {
        let mut mgr = ToastManager::new();
        mgr.push(Toast::new("old", ToastLevel::Error).with_lifetime(Duration::ZERO));
        mgr.info("new");
        mgr.tick();
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.latest_message(), Some("new"));
    }
}
