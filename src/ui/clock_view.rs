//! GTK host for the clock widget
//!
//! Wraps a [`ClockWidget`] in a `DrawingArea`. The draw function sizes the
//! widget, renders and paints a frame, then schedules the next frame with a
//! one-shot glib timeout. Timeouts hold only weak references, so nothing fires
//! once the drawing area or the widget is gone.

use clockface_core::scheduler::{FrameScheduler, RedrawRequest};
use clockface_core::{ClockWidget, MeasureSpec};
use clockface_types::{ClockStyle, PersistedConfig};
use gtk4::{glib, prelude::*, DrawingArea};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::render::{paint_frame, PangoMetrics};

/// Schedules redraws on the glib main loop
struct GlibFrameScheduler {
    area: glib::WeakRef<DrawingArea>,
    widget: Weak<RefCell<ClockWidget>>,
}

impl FrameScheduler for GlibFrameScheduler {
    fn schedule_redraw(&mut self, request: RedrawRequest) {
        let area = self.area.clone();
        let widget = self.widget.clone();
        glib::timeout_add_local_once(request.delay, move || {
            let (Some(area), Some(widget)) = (area.upgrade(), widget.upgrade()) else {
                return;
            };
            // Release the borrow before queue_draw can re-enter the draw func
            let due = widget.borrow_mut().on_frame_due(request.id);
            if due {
                area.queue_draw();
            }
        });
    }
}

/// A drawing area showing a live analog clock
pub struct ClockView {
    drawing_area: DrawingArea,
    widget: Rc<RefCell<ClockWidget>>,
}

impl ClockView {
    pub fn new(style: ClockStyle, density: f64) -> Self {
        let widget = ClockWidget::with_measurer(style, Box::new(PangoMetrics));
        let (width, height) =
            widget.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified, density);

        let drawing_area = DrawingArea::new();
        drawing_area.set_size_request(width, height);
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let widget = Rc::new(RefCell::new(widget));

        let widget_for_draw = widget.clone();
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let mut scheduler = GlibFrameScheduler {
                area: area.downgrade(),
                widget: Rc::downgrade(&widget_for_draw),
            };
            let frame = {
                let mut widget = widget_for_draw.borrow_mut();
                widget.set_size(width, height);
                widget.render_frame(None, &mut scheduler)
            };
            if let Err(e) = paint_frame(cr, &frame) {
                log::warn!("Failed to paint clock frame: {}", e);
            }
        });

        let widget_for_realize = widget.clone();
        drawing_area.connect_realize(move |area| {
            widget_for_realize.borrow_mut().attach();
            area.queue_draw();
        });

        // unrealize fires when the widget's surface is torn down; stop the loop
        let widget_for_unrealize = widget.clone();
        drawing_area.connect_unrealize(move |_| {
            widget_for_unrealize.borrow_mut().detach();
        });

        Self {
            drawing_area,
            widget,
        }
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.drawing_area
    }

    pub fn set_style(&self, style: ClockStyle) {
        self.widget.borrow_mut().set_style(style);
        self.drawing_area.queue_draw();
    }

    pub fn save(&self, super_state: Option<Value>) -> PersistedConfig {
        self.widget.borrow().save(super_state)
    }

    /// Restore saved colors and return the host's own saved state
    pub fn restore(&self, config: Option<PersistedConfig>) -> Option<Value> {
        let super_state = self.widget.borrow_mut().restore(config);
        self.drawing_area.queue_draw();
        super_state
    }
}
