//! Cairo backend for clock frames
//!
//! Paints the primitive list produced by the compositor onto a Cairo context
//! in emission order, so later layers cover earlier ones.

mod export;
pub mod pango_text;

pub use export::{export_png, render_to_surface};
pub use pango_text::PangoMetrics;

use cairo::Context;
use clockface_core::constants::{LABEL_LETTER_SPACING_EM, LABEL_TEXT_SCALE_X};
use clockface_types::{DrawPrimitive, PaintStyle};
use std::f64::consts::PI;

/// Paint one frame
pub fn paint_frame(cr: &Context, frame: &[DrawPrimitive]) -> Result<(), cairo::Error> {
    for primitive in frame {
        paint_primitive(cr, primitive)?;
    }
    Ok(())
}

/// Paint a single primitive
pub fn paint_primitive(cr: &Context, primitive: &DrawPrimitive) -> Result<(), cairo::Error> {
    cr.save()?;
    primitive.color().apply_to_cairo(cr);

    match primitive {
        DrawPrimitive::Circle {
            center,
            radius,
            paint,
            stroke_width,
            ..
        } => {
            cr.new_path();
            cr.arc(center.x, center.y, radius.max(0.0), 0.0, 2.0 * PI);
            match paint {
                PaintStyle::Fill => cr.fill()?,
                PaintStyle::Stroke => {
                    cr.set_line_width(*stroke_width);
                    cr.stroke()?;
                }
            }
        }
        DrawPrimitive::Line {
            from,
            to,
            stroke_width,
            ..
        } => {
            cr.set_line_width(*stroke_width);
            cr.move_to(from.x, from.y);
            cr.line_to(to.x, to.y);
            cr.stroke()?;
        }
        DrawPrimitive::Text {
            position,
            text,
            size,
            ..
        } => {
            pango_text::show_centered_text(
                cr,
                text,
                position.x,
                position.y,
                *size,
                LABEL_TEXT_SCALE_X,
                LABEL_LETTER_SPACING_EM,
            )?;
        }
    }

    cr.restore()?;
    Ok(())
}
