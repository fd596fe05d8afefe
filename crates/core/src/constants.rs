//! Shared constants for the clock face

use std::f64::consts::PI;
use std::time::Duration;

/// Delay between a completed render and the next redraw request
pub const REFRESH_PERIOD: Duration = Duration::from_millis(180);

/// Angle of "12 o'clock" (angle 0 points along +x, y grows downward)
pub const START_ANGLE: f64 = -PI / 2.0;

/// Radians per minute/second step and per tick dot
pub const MINUTE_STEP: f64 = PI / 30.0;

/// Radians per hour step
pub const HOUR_STEP: f64 = PI / 6.0;

/// Number of tick dots around the dial
pub const TICK_COUNT: u32 = 60;

/// Number of hour labels
pub const HOUR_LABEL_COUNT: u32 = 12;

/// Default widget edge in density-independent pixels
pub const DEFAULT_SIZE_DP: i32 = 240;

/// Horizontal squeeze applied to hour label glyphs
pub const LABEL_TEXT_SCALE_X: f64 = 0.9;

/// Extra space between hour label glyphs, in ems (negative tightens)
pub const LABEL_LETTER_SPACING_EM: f64 = -0.15;
