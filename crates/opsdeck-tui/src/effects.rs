//! Visual transitions, powered by tachyonfx.
//!
//! The web version of this console animated panels in with CSS
//! (`animate-fade-in`, `tool-panel-enter`); here the same moments get a
//! short tachyonfx pass layered over the rendered buffer: tab switches fade,
//! the workflow detail view sweeps in.

use std::time::Duration;

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use tachyonfx::{fx, Effect, EffectManager as FxManager, Interpolation, Motion};

/// Fade from black, used on tab switches. Short enough not to get in the way
/// at the default 250 ms poll interval.
pub fn tab_fade() -> Effect {
    let dark = Color::Black;
    fx::fade_from(dark, dark, (200, Interpolation::QuadOut))
}

/// Sweep-in from the left, used when the workflow detail view opens.
pub fn detail_sweep() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,            // gradient length
        2,            // randomness
        Color::Black, // receding color
        (250, Interpolation::QuadOut),
    )
}

/// Wraps a tachyonfx manager keyed by effect slot, so re-triggering a
/// transition replaces the previous one instead of stacking.
pub struct EffectManager {
    inner: FxManager<&'static str>,
}

impl EffectManager {
    pub fn new() -> Self {
        Self {
            inner: FxManager::default(),
        }
    }

    /// Replace the effect in `slot` (e.g. "tab", "detail").
    pub fn trigger(&mut self, slot: &'static str, effect: Effect) {
        self.inner.add_unique_effect(slot, effect);
    }

    /// Advance active effects by `delta` and paint them over `buf`. Call
    /// after all widgets have rendered.
    pub fn tick(&mut self, delta: Duration, buf: &mut Buffer, area: Rect) {
        self.inner.process_effects(delta.into(), buf, area);
    }
}

impl Default for EffectManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tachyonfx::Shader;

    #[test]
    fn fresh_effects_are_not_done() {
        assert!(!tab_fade().done());
        assert!(!detail_sweep().done());
    }

    #[test]
    fn manager_processes_a_frame() {
        let mut mgr = EffectManager::new();
        mgr.trigger("tab", tab_fade());
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        mgr.tick(Duration::from_millis(16), &mut buf, area);
    }

    #[test]
    fn retrigger_replaces_slot() {
        let mut mgr = EffectManager::new();
        mgr.trigger("detail", detail_sweep());
        mgr.trigger("detail", detail_sweep());
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        mgr.tick(Duration::from_millis(16), &mut buf, area);
    }
}
