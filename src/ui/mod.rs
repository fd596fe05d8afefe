//! GTK user interface

mod clock_view;

pub use clock_view::ClockView;
