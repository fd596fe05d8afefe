//! clockface: an analog clock face widget
//!
//! This library bundles:
//! - the platform-neutral widget core (geometry, compositor, redraw loop,
//!   style save/restore) from `clockface-core`
//! - configuration and instance-state persistence for the host application
//! - with the `gtk` feature, a Cairo/Pango painter and a GTK drawing area host

pub mod config;
#[cfg(feature = "gtk")]
pub mod render;
#[cfg(feature = "gtk")]
pub mod ui;

// Re-export commonly used types
pub use clockface_core::{ClockWidget, FrameScheduler, MeasureSpec, RedrawScheduler, ViewportState};
pub use clockface_types::{ClockStyle, Color, DrawPrimitive, PersistedConfig, TimeSample};
pub use config::{AppConfig, StateStore};
