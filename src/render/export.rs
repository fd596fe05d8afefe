//! Offscreen rendering and PNG export

use anyhow::{Context as _, Result};
use cairo::{Context, Format, ImageSurface};
use clockface_core::ClockWidget;
use clockface_types::TimeSample;
use std::fs::File;
use std::path::Path;

/// Render one frame of `widget` into a new ARGB surface of the widget's size
pub fn render_to_surface(widget: &ClockWidget, time: Option<TimeSample>) -> Result<ImageSurface> {
    let viewport = widget.viewport();
    let surface = ImageSurface::create(
        Format::ARgb32,
        viewport.width().max(1),
        viewport.height().max(1),
    )?;

    {
        let cr = Context::new(&surface)?;
        super::paint_frame(&cr, &widget.render(time))?;
    }
    surface.flush();
    Ok(surface)
}

/// Render one frame and write it to `path` as PNG
pub fn export_png(widget: &ClockWidget, time: Option<TimeSample>, path: &Path) -> Result<()> {
    let surface = render_to_surface(widget, time)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote clock frame to {}", path.display());
    Ok(())
}
