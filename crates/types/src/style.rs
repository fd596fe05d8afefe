//! Clock face color configuration

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The seven resolved colors of a clock face
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockStyle {
    #[serde(default = "default_ink")]
    pub ring: Color,
    #[serde(default = "default_ink")]
    pub hour_hand: Color,
    #[serde(default = "default_ink")]
    pub minute_hand: Color,
    #[serde(default)]
    pub second_hand: Color,
    #[serde(default)]
    pub dots: Color,
    #[serde(default = "default_ink")]
    pub text: Color,
    #[serde(default)]
    pub background: Color,
}

fn default_ink() -> Color {
    Color::BLACK
}

impl ClockStyle {
    pub fn new(
        ring: Color,
        hour_hand: Color,
        minute_hand: Color,
        second_hand: Color,
        dots: Color,
        text: Color,
        background: Color,
    ) -> Self {
        Self {
            ring,
            hour_hand,
            minute_hand,
            second_hand,
            dots,
            text,
            background,
        }
    }
}

impl Default for ClockStyle {
    fn default() -> Self {
        // Unstyled faces draw in black ink on a transparent dial
        Self {
            ring: default_ink(),
            hour_hand: default_ink(),
            minute_hand: default_ink(),
            second_hand: Color::TRANSPARENT,
            dots: Color::TRANSPARENT,
            text: default_ink(),
            background: Color::TRANSPARENT,
        }
    }
}
