//! The clock widget as seen by a host
//!
//! Ties the viewport, style store, compositor and redraw loop together behind
//! the calls a host makes: size it, style it, save/restore it, render it.

use clockface_types::{ClockStyle, DrawPrimitive, PersistedConfig, TimeSample};
use serde_json::Value;

use crate::compositor::compose;
use crate::config_store::ConfigStore;
use crate::metrics::{ApproximateMetrics, TextMeasurer};
use crate::scheduler::{FrameScheduler, RedrawScheduler};
use crate::viewport::{measure, MeasureSpec, ViewportState};

/// Analog clock widget state, exclusively owned by one host view
pub struct ClockWidget {
    viewport: ViewportState,
    config: ConfigStore,
    scheduler: RedrawScheduler,
    measurer: Box<dyn TextMeasurer>,
}

impl ClockWidget {
    pub fn new(style: ClockStyle) -> Self {
        Self::with_measurer(style, Box::new(ApproximateMetrics::default()))
    }

    pub fn with_measurer(style: ClockStyle, measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            viewport: ViewportState::default(),
            config: ConfigStore::new(style),
            scheduler: RedrawScheduler::new(),
            measurer,
        }
    }

    /// Swap the font metrics source, e.g. once a real font engine is available
    pub fn set_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
    }

    /// Preferred size under the host's constraints
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec, density: f64) -> (i32, i32) {
        measure(width, height, density)
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        if width != self.viewport.width() || height != self.viewport.height() {
            log::debug!("Clock resized to {}x{}", width, height);
        }
        self.viewport.resize(width, height);
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn set_style(&mut self, style: ClockStyle) {
        self.config.set_style(style);
    }

    pub fn style(&self) -> &ClockStyle {
        self.config.style()
    }

    pub fn save(&self, super_state: Option<Value>) -> PersistedConfig {
        self.config.save(super_state)
    }

    /// Restore from a snapshot, handing back the host's own state
    pub fn restore(&mut self, config: Option<PersistedConfig>) -> Option<Value> {
        self.config.restore(config)
    }

    /// Compose one frame. `None` samples the local clock now.
    pub fn render(&self, time: Option<TimeSample>) -> Vec<DrawPrimitive> {
        let time = time.unwrap_or_else(TimeSample::now);
        log::trace!(
            "Rendering clock at {:02}:{:02}:{:02}",
            time.hour,
            time.minute,
            time.second
        );
        compose(self.config.style(), &self.viewport, &time, self.measurer.as_ref())
    }

    /// Render and then ask the host for the next frame
    pub fn render_frame(
        &mut self,
        time: Option<TimeSample>,
        host: &mut dyn FrameScheduler,
    ) -> Vec<DrawPrimitive> {
        let frame = self.render(time);
        self.scheduler.on_render_complete(host);
        frame
    }

    /// A scheduled request fired; true if the host should render now
    pub fn on_frame_due(&mut self, id: u64) -> bool {
        self.scheduler.on_frame_due(id)
    }

    pub fn attach(&mut self) {
        self.scheduler.attach();
    }

    pub fn detach(&mut self) {
        self.scheduler.detach();
    }

    pub fn scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }
}

impl Default for ClockWidget {
    fn default() -> Self {
        Self::new(ClockStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::PRIMITIVES_PER_FRAME;
    use crate::scheduler::RedrawRequest;
    use clockface_types::Color;
    use serde_json::json;

    #[derive(Default)]
    struct Host {
        requests: Vec<RedrawRequest>,
    }

    impl FrameScheduler for Host {
        fn schedule_redraw(&mut self, request: RedrawRequest) {
            self.requests.push(request);
        }
    }

    #[test]
    fn test_resize_visible_to_next_render() {
        let mut widget = ClockWidget::default();
        widget.set_size(100, 100);
        let before = widget.render(Some(TimeSample::default()));
        widget.set_size(400, 200);
        let after = widget.render(Some(TimeSample::default()));

        let DrawPrimitive::Circle { radius, .. } = &after[0] else {
            panic!("expected background disc");
        };
        assert_eq!(*radius, 100.0);
        assert_ne!(before, after);
    }

    #[test]
    fn test_style_change_visible_to_next_render() {
        let mut widget = ClockWidget::default();
        widget.set_size(100, 100);
        let mut style = *widget.style();
        style.background = Color::WHITE;
        widget.set_style(style);
        assert_eq!(widget.render(None)[0].color(), Color::WHITE);
    }

    #[test]
    fn test_restore_visible_to_next_render() {
        let mut source = ClockWidget::default();
        let mut style = ClockStyle::default();
        style.ring = Color(0xFF12_3456);
        source.set_style(style);
        let saved = source.save(Some(json!(7)));

        let mut widget = ClockWidget::default();
        widget.set_size(60, 60);
        assert_eq!(widget.restore(Some(saved)), Some(json!(7)));
        assert_eq!(widget.render(None)[1].color(), Color(0xFF12_3456));
    }

    #[test]
    fn test_render_frame_schedules_next() {
        let mut widget = ClockWidget::default();
        let mut host = Host::default();
        widget.set_size(120, 120);

        for _ in 0..5 {
            let frame = widget.render_frame(None, &mut host);
            assert_eq!(frame.len(), PRIMITIVES_PER_FRAME);
            let id = host.requests.last().map(|r| r.id).unwrap_or_default();
            assert!(widget.on_frame_due(id));
        }
        assert_eq!(host.requests.len(), 5);

        widget.detach();
        widget.render_frame(None, &mut host);
        assert_eq!(host.requests.len(), 5);
    }

    #[test]
    fn test_measure_default_size() {
        let widget = ClockWidget::default();
        assert_eq!(
            widget.measure(MeasureSpec::Unspecified, MeasureSpec::AtMost(100), 1.0),
            (240, 100)
        );
    }
}
