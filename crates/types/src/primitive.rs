//! Draw primitives emitted by the clock compositor.
//!
//! A frame is an ordered `Vec<DrawPrimitive>`; later entries paint over
//! earlier ones. Primitives are plain values with no backend attached, so any
//! surface (Cairo, a test recorder, an embedded framebuffer) can consume them.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A point in widget device coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// How a circle is painted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[serde(rename = "fill")]
    #[default]
    Fill,
    #[serde(rename = "stroke")]
    Stroke,
}

/// One drawing command of a render pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        paint: PaintStyle,
        /// Zero for filled circles
        stroke_width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        stroke_width: f64,
    },
    /// `position.x` is the horizontal center of the text, `position.y` its baseline
    Text {
        position: Point,
        text: String,
        color: Color,
        size: f64,
    },
}

impl DrawPrimitive {
    pub fn color(&self) -> Color {
        match self {
            DrawPrimitive::Circle { color, .. }
            | DrawPrimitive::Line { color, .. }
            | DrawPrimitive::Text { color, .. } => *color,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DrawPrimitive::Circle { .. } => "circle",
            DrawPrimitive::Line { .. } => "line",
            DrawPrimitive::Text { .. } => "text",
        }
    }
}
