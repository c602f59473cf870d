//! Frame scheduling
//!
//! "Call me before the next repaint", with a timer fallback for hosts
//! that have no repaint-driven scheduler.
//!
//! The host owns the event loop. It calls [`FrameScheduler::poll`] every
//! time it gets control (each repaint, or each timer wake) and runs the
//! frame callback when a handle comes back.

use crate::MediaError;

/// Default timer fallback interval (~60Hz)
pub const FALLBACK_INTERVAL_MS: f64 = 16.0;

/// Handle to a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Scheduler kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerKind {
    /// Fires on the host's next repaint
    Repaint,
    /// Fires on a fixed-interval timer
    Interval,
}

/// What the host environment offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    pub repaint_callbacks: bool,
    pub timers: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            repaint_callbacks: true,
            timers: true,
        }
    }
}

/// Frame scheduler
pub trait FrameScheduler {
    fn kind(&self) -> SchedulerKind;

    /// Request a callback. Replaces any request still pending.
    fn request_frame(&mut self, now_ms: f64) -> FrameHandle;

    /// Cancel a pending request. Unknown or stale handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Take the pending handle if it is due at `now_ms`
    fn poll(&mut self, now_ms: f64) -> Option<FrameHandle>;

    /// Whether a request is outstanding
    fn is_pending(&self) -> bool;
}

/// Repaint-driven scheduler. Every poll is one repaint, so a pending
/// request fires on the first poll after it was made.
#[derive(Debug, Default)]
pub struct RepaintScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl RepaintScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for RepaintScheduler {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::Repaint
    }

    fn request_frame(&mut self, _now_ms: f64) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn poll(&mut self, _now_ms: f64) -> Option<FrameHandle> {
        self.pending.take()
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Timer fallback. Spaces callbacks at least `interval_ms` apart:
/// a request made at `now` fires at `now + max(0, interval - (now - last))`.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval_ms: f64,
    next_id: u64,
    last_deadline_ms: f64,
    pending: Option<(FrameHandle, f64)>,
}

impl IntervalScheduler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_id: 0,
            last_deadline_ms: 0.0,
            pending: None,
        }
    }

    /// When the pending request is due
    pub fn deadline_ms(&self) -> Option<f64> {
        self.pending.map(|(_, deadline)| deadline)
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(FALLBACK_INTERVAL_MS)
    }
}

impl FrameScheduler for IntervalScheduler {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::Interval
    }

    fn request_frame(&mut self, now_ms: f64) -> FrameHandle {
        let delay = (self.interval_ms - (now_ms - self.last_deadline_ms)).max(0.0);
        let deadline = now_ms + delay;
        self.last_deadline_ms = deadline;

        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some((handle, deadline));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }

    fn poll(&mut self, now_ms: f64) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, deadline)) if now_ms >= deadline => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Pick the best scheduler the host supports
pub fn select_scheduler(caps: HostCapabilities) -> Result<Box<dyn FrameScheduler>, MediaError> {
    if caps.repaint_callbacks {
        Ok(Box::new(RepaintScheduler::new()))
    } else if caps.timers {
        tracing::debug!("No repaint callbacks, falling back to {}ms timer", FALLBACK_INTERVAL_MS);
        Ok(Box::new(IntervalScheduler::default()))
    } else {
        Err(MediaError::SchedulerUnavailable)
    }
}
