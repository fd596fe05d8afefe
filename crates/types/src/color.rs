//! Packed ARGB color values.
//!
//! Colors travel through the widget as resolved 32-bit ARGB integers, the
//! same shape a host theme system hands out and the persisted snapshot stores.

use serde::{Deserialize, Serialize};

/// 32-bit ARGB color (`0xAARRGGBB`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Accept either an unsigned ARGB value or the signed form some hosts
    /// persist (`0xFF000000` stored as `-16777216`).
    pub fn from_json_int(value: i64) -> Option<Self> {
        if (i32::MIN as i64..=u32::MAX as i64).contains(&value) {
            Some(Self(value as u32))
        } else {
            None
        }
    }

    pub const fn argb(&self) -> u32 {
        self.0
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
            (self.0 >> 24) as u8,
        )
    }

    /// Channels as 0.0..=1.0 floats in r, g, b, a order
    pub fn to_rgba_f64(&self) -> (f64, f64, f64, f64) {
        let (r, g, b, a) = self.to_rgba8();
        (
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    pub fn is_transparent(&self) -> bool {
        self.0 >> 24 == 0
    }

    /// Apply to Cairo context
    #[cfg(feature = "gtk")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        let (r, g, b, a) = self.to_rgba_f64();
        cr.set_source_rgba(r, g, b, a);
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}
