//! Font metrics used to center hour labels on their anchors

/// Font metrics for baseline positioning
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from top of logical rect to baseline
    pub ascent: f64,
    /// Distance from baseline to bottom of logical rect
    pub descent: f64,
    /// Total logical height (ascent + descent)
    pub height: f64,
}

impl FontMetrics {
    pub fn new(ascent: f64, descent: f64) -> Self {
        Self {
            ascent,
            descent,
            height: ascent + descent,
        }
    }

    /// How far below a visual center point the baseline sits
    pub fn center_to_baseline(&self) -> f64 {
        (self.ascent - self.descent) / 2.0
    }
}

/// Supplies metrics of the label font at a given size
pub trait TextMeasurer {
    fn font_metrics(&self, size: f64) -> FontMetrics;
}

/// Proportional metrics of a typical sans-serif face, for hosts without a
/// font engine
#[derive(Debug, Clone, Copy)]
pub struct ApproximateMetrics {
    pub ascent_ratio: f64,
    pub descent_ratio: f64,
}

impl Default for ApproximateMetrics {
    fn default() -> Self {
        Self {
            ascent_ratio: 0.928,
            descent_ratio: 0.244,
        }
    }
}

impl TextMeasurer for ApproximateMetrics {
    fn font_metrics(&self, size: f64) -> FontMetrics {
        FontMetrics::new(size * self.ascent_ratio, size * self.descent_ratio)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn font_metrics(&self, size: f64) -> FontMetrics {
        (**self).font_metrics(size)
    }
}
