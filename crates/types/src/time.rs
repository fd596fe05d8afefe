//! Wall-clock time samples

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Hour, minute and second read from the local clock for one render pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TimeSample {
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeSample {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Sample the system local time
    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }

    /// Hour on the 12-hour dial (13 -> 1, 24 -> 0)
    pub fn dial_hour(&self) -> u32 {
        self.hour % 12
    }

    /// Dial hour plus the elapsed fraction of the current hour
    pub fn hour_with_minutes(&self) -> f64 {
        self.dial_hour() as f64 + self.minute as f64 / 60.0
    }
}
