//! clockface-core: geometry, compositor, redraw loop and config store.
//!
//! Everything here is synchronous and single-threaded. The host owns the
//! event loop and the drawing surface; this crate only computes frames and
//! tells the host when it wants the next one.

pub mod compositor;
pub mod config_store;
pub mod constants;
pub mod metrics;
pub mod scheduler;
pub mod viewport;
pub mod widget;

pub use compositor::compose;
pub use config_store::ConfigStore;
pub use constants::REFRESH_PERIOD;
pub use metrics::{ApproximateMetrics, FontMetrics, TextMeasurer};
pub use scheduler::{FrameScheduler, RedrawRequest, RedrawScheduler};
pub use viewport::{MeasureSpec, ViewportState};
pub use widget::ClockWidget;
