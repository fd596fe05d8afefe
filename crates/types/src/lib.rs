//! clockface-types: Shared data types for the clockface widget.
//!
//! This crate contains pure data types (colors, style, time samples, draw
//! primitives and the persisted snapshot) shared by the core and the host
//! application. No Cairo dependency unless the `gtk` feature is enabled.

pub mod color;
pub mod persisted;
pub mod primitive;
pub mod style;
pub mod time;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use persisted::{ConfigError, PersistedConfig};
pub use primitive::{DrawPrimitive, PaintStyle, Point};
pub use style::ClockStyle;
pub use time::TimeSample;
