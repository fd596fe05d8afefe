//! Widget size, derived dial center and radius, and size negotiation

use clockface_types::Point;

use crate::constants::DEFAULT_SIZE_DP;

/// Current widget size and the dial geometry derived from it.
///
/// Fields are private so `center` and `radius` can never drift from the
/// dimensions they were computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    width: i32,
    height: i32,
    center: Point,
    radius: f64,
}

impl ViewportState {
    pub fn new(width: i32, height: i32) -> Self {
        let mut viewport = Self {
            width: 0,
            height: 0,
            center: Point::default(),
            radius: 0.0,
        };
        viewport.resize(width, height);
        viewport
    }

    /// Recompute center and radius. Negative sizes give a zero radius.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
        self.radius = width.min(height).max(0) as f64 / 2.0;
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Project a polar offset around the dial center
    pub fn project(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.center.x + distance * angle.cos(),
            self.center.y + distance * angle.sin(),
        )
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Host layout constraint for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The host dictates this exact size
    Exactly(i32),
    /// Any size up to this bound
    AtMost(i32),
    /// No constraint
    Unspecified,
}

/// Pick a size for one axis given the preferred size and the host constraint
pub fn resolve_size(preferred: i32, spec: MeasureSpec) -> i32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(bound) => preferred.min(bound),
        MeasureSpec::Unspecified => preferred,
    }
}

/// Preferred widget edge in device pixels for a display density
pub fn default_size(density: f64) -> i32 {
    (DEFAULT_SIZE_DP as f64 * density) as i32
}

/// Resolve both axes against the host constraints
pub fn measure(width_spec: MeasureSpec, height_spec: MeasureSpec, density: f64) -> (i32, i32) {
    let preferred = default_size(density);
    (
        resolve_size(preferred, width_spec),
        resolve_size(preferred, height_spec),
    )
}
