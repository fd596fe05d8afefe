//! Pango text helpers for hour labels
//!
//! Labels are drawn through Pango so glyph metrics match what ends up on
//! screen. Font descriptions are cached per size on the UI thread.

use cairo::Context;
use clockface_core::{FontMetrics, TextMeasurer};
use pango::prelude::*;
use pango::{AttrInt, AttrList, FontDescription};
use pangocairo::functions::{create_layout, show_layout};
use std::cell::RefCell;
use std::collections::HashMap;

/// Family used for hour labels
pub const LABEL_FONT_FAMILY: &str = "Sans";

/// Cache for FontDescription objects keyed by absolute size in Pango units
struct FontDescriptionCache {
    cache: HashMap<i32, FontDescription>,
    max_entries: usize,
}

impl FontDescriptionCache {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 32,
        }
    }

    fn get_or_create(&mut self, size: f64) -> FontDescription {
        let size_pango = (size * pango::SCALE as f64) as i32;
        if let Some(desc) = self.cache.get(&size_pango) {
            return desc.clone();
        }

        // Sizes only change on resize, so a full clear is cheap enough
        if self.cache.len() >= self.max_entries {
            self.cache.clear();
        }

        let mut desc = FontDescription::new();
        desc.set_family(LABEL_FONT_FAMILY);
        desc.set_absolute_size(size_pango as f64);

        self.cache.insert(size_pango, desc.clone());
        desc
    }
}

thread_local! {
    static FONT_DESC_CACHE: RefCell<FontDescriptionCache> = RefCell::new(FontDescriptionCache::new());
}

fn label_font(size: f64) -> FontDescription {
    FONT_DESC_CACHE.with(|cache| cache.borrow_mut().get_or_create(size))
}

/// Metrics of a laid-out "Xg", which has both an ascender and a descender
fn layout_metrics(layout: &pango::Layout) -> FontMetrics {
    layout.set_text("Xg");
    let scale = pango::SCALE as f64;
    let baseline = layout.baseline() as f64 / scale;
    let (_, logical_rect) = layout.extents();
    let height = logical_rect.height() as f64 / scale;
    FontMetrics::new(baseline, height - baseline)
}

/// Measures the label font with Pango's Cairo font map
#[derive(Debug, Default, Clone, Copy)]
pub struct PangoMetrics;

impl TextMeasurer for PangoMetrics {
    fn font_metrics(&self, size: f64) -> FontMetrics {
        if size <= 0.0 {
            return FontMetrics::default();
        }
        let context = pangocairo::FontMap::default().create_context();
        let layout = pango::Layout::new(&context);
        layout.set_font_description(Some(&label_font(size)));
        layout_metrics(&layout)
    }
}

/// Letter spacing in Pango units for a label of `size` pixels
pub fn letter_spacing_units(size: f64, spacing_em: f64) -> i32 {
    (size * spacing_em * pango::SCALE as f64).round() as i32
}

/// Layout for one label with the label font and letter spacing applied
fn label_layout(cr: &Context, text: &str, size: f64, spacing_em: f64) -> pango::Layout {
    let layout = create_layout(cr);
    layout.set_font_description(Some(&label_font(size)));

    let attrs = AttrList::new();
    attrs.insert(AttrInt::new_letter_spacing(letter_spacing_units(size, spacing_em)));
    layout.set_attributes(Some(&attrs));

    layout.set_text(text);
    layout
}

/// Draw `text` horizontally centered on `x` with its baseline on `y`,
/// squeezed horizontally by `scale_x`
pub fn show_centered_text(
    cr: &Context,
    text: &str,
    x: f64,
    y: f64,
    size: f64,
    scale_x: f64,
    spacing_em: f64,
) -> Result<(), cairo::Error> {
    if size <= 0.0 || text.is_empty() {
        return Ok(());
    }

    let layout = label_layout(cr, text, size, spacing_em);

    let scale = pango::SCALE as f64;
    let (_, logical_rect) = layout.extents();
    let width = logical_rect.width() as f64 / scale;
    // Pango draws from the top-left of the logical rect, not the baseline
    let baseline = layout.baseline() as f64 / scale;

    cr.save()?;
    cr.translate(x, y);
    cr.scale(scale_x, 1.0);
    cr.move_to(-width / 2.0, -baseline);
    show_layout(cr, &layout);
    cr.restore()?;
    Ok(())
}
