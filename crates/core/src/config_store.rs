//! Style ownership and lifecycle save/restore

use clockface_types::{ClockStyle, Color, PersistedConfig};
use serde_json::Value;

/// Owns the clock's current style and converts it to and from a
/// [`PersistedConfig`] across a lifecycle boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    style: ClockStyle,
}

impl ConfigStore {
    pub fn new(style: ClockStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ClockStyle) {
        self.style = style;
    }

    /// Snapshot the style together with the host's own state
    pub fn save(&self, super_state: Option<Value>) -> PersistedConfig {
        let style = &self.style;
        PersistedConfig {
            ring_color: Some(style.ring),
            text_color: Some(style.text),
            dots_color: Some(style.dots),
            hour_hand_color: Some(style.hour_hand),
            minute_hand_color: Some(style.minute_hand),
            second_hand_color: Some(style.second_hand),
            background_color: Some(style.background),
            super_state,
        }
    }

    /// Repopulate the style from a snapshot, consuming it.
    ///
    /// `None` leaves the style untouched. Colors missing from the snapshot
    /// keep their current value. Returns the host state for the host to
    /// restore itself.
    pub fn restore(&mut self, config: Option<PersistedConfig>) -> Option<Value> {
        let Some(config) = config else {
            log::debug!("No saved clock state, keeping current style");
            return None;
        };

        let restored = config.color_count();
        let style = &mut self.style;
        apply(&mut style.ring, config.ring_color);
        apply(&mut style.text, config.text_color);
        apply(&mut style.dots, config.dots_color);
        apply(&mut style.hour_hand, config.hour_hand_color);
        apply(&mut style.minute_hand, config.minute_hand_color);
        apply(&mut style.second_hand, config.second_hand_color);
        apply(&mut style.background, config.background_color);
        log::debug!("Restored {} of 7 clock colors", restored);

        config.super_state
    }
}

fn apply(slot: &mut Color, saved: Option<Color>) {
    if let Some(color) = saved {
        *slot = color;
    }
}
