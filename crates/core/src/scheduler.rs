//! Self-perpetuating redraw loop.
//!
//! Each completed render asks the host for exactly one more render after
//! [`REFRESH_PERIOD`]. The scheduler owns no thread or timer of its own: the
//! host's event loop supplies the delayed callback through [`FrameScheduler`]
//! and reports back with [`RedrawScheduler::on_frame_due`] when it fires.

use std::time::Duration;

use crate::constants::REFRESH_PERIOD;

/// One delayed render request handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRequest {
    /// Sequence number to hand back to [`RedrawScheduler::on_frame_due`]
    pub id: u64,
    pub delay: Duration,
}

/// Host-provided "call me back after a delay" primitive
pub trait FrameScheduler {
    /// Arrange for `on_frame_due(request.id)` and a render after `request.delay`
    fn schedule_redraw(&mut self, request: RedrawRequest);
}

/// Tracks attachment and the single outstanding redraw request
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    period: Duration,
    attached: bool,
    pending: Option<u64>,
    issued: u64,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::with_period(REFRESH_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            attached: true,
            pending: None,
            issued: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a request has been issued and not yet fired
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total requests issued to the host
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Widget is back on a display surface. The loop resumes with the next
    /// host-triggered render.
    pub fn attach(&mut self) {
        if !self.attached {
            log::debug!("Clock attached, redraw loop resumes on next render");
        }
        self.attached = true;
    }

    /// Widget left its display surface. Any outstanding request goes stale.
    pub fn detach(&mut self) {
        if self.attached {
            log::debug!("Clock detached, redraw loop stopped");
        }
        self.attached = false;
        self.pending = None;
    }

    /// Called after every completed render. Returns true if a follow-up
    /// request was issued.
    pub fn on_render_complete(&mut self, host: &mut dyn FrameScheduler) -> bool {
        if !self.attached {
            log::trace!("Render completed while detached, not rescheduling");
            return false;
        }
        if self.pending.is_some() {
            // A request is already in flight; its frame will show fresher time
            log::trace!("Redraw already pending, absorbing extra render");
            return false;
        }

        self.issued += 1;
        let request = RedrawRequest {
            id: self.issued,
            delay: self.period,
        };
        self.pending = Some(request.id);
        log::trace!("Scheduling redraw #{} in {:?}", request.id, request.delay);
        host.schedule_redraw(request);
        true
    }

    /// Called by the host when request `id` fires. Returns true if the host
    /// should render now; stale requests from before a detach return false.
    pub fn on_frame_due(&mut self, id: u64) -> bool {
        if self.pending != Some(id) {
            log::trace!("Ignoring stale redraw #{}", id);
            return false;
        }
        self.pending = None;
        self.attached
    }
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new()
    }
}
