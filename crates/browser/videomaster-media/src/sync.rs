//! Frame-sync loop
//!
//! Steps a paused video element forward by wall-clock time so it can be
//! used as a frame source for canvas drawing, and keeps an audio element
//! within [`DRIFT_THRESHOLD_SECS`] of it.
//!
//! The primary clock is driven by software, not by native playback: each
//! tick adds the elapsed wall time to its position. The secondary clock
//! plays natively and is only snapped back when the drift grows too
//! large. Snapping rather than rate-matching keeps the audio pitch stable.
//!
//! The loop holds no timing state of its own. [`FrameSync::start`] hands a
//! [`SyncState`] to the caller, who passes it back on every tick.

use crate::{MediaError, PlaybackClock};

/// Default minimum tick rate for advancing the primary clock
pub const DEFAULT_TARGET_FPS: f64 = 30.0;

/// Drift above which the secondary clock is hard-set to the primary
pub const DRIFT_THRESHOLD_SECS: f64 = 0.3;

/// Loop state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

/// Timing state for one activation of the loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncState {
    /// Host timestamp of the last tick that advanced the primary clock
    pub last_tick_ms: f64,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Seconds the primary clock moved forward, if it moved
    pub advanced_by: Option<f64>,
    /// Secondary clock was snapped to the primary
    pub resynced: bool,
    /// Caller should schedule another tick
    pub reschedule: bool,
}

/// Frame-sync loop
#[derive(Debug, Clone)]
pub struct FrameSync {
    target_fps: f64,
    state: LoopState,
}

impl FrameSync {
    pub fn new() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            state: LoopState::Idle,
        }
    }

    /// Create with a custom target frame rate
    pub fn with_target_fps(fps: f64) -> Result<Self, MediaError> {
        let mut sync = Self::new();
        sync.set_target_fps(fps)?;
        Ok(sync)
    }

    pub fn set_target_fps(&mut self, fps: f64) -> Result<(), MediaError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(MediaError::InvalidFrameRate(fps));
        }
        self.target_fps = fps;
        Ok(())
    }

    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    /// Minimum elapsed time before the primary clock moves
    pub fn min_interval_secs(&self) -> f64 {
        1.0 / self.target_fps
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Idle -> Running. Returns fresh timing state anchored at `now_ms`.
    pub fn start(&mut self, now_ms: f64) -> SyncState {
        self.state = LoopState::Running;
        tracing::debug!("Frame sync started at {}ms ({} fps)", now_ms, self.target_fps);
        SyncState { last_tick_ms: now_ms }
    }

    /// Request a stop. Observed by the next tick, which still runs in full.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            tracing::debug!("Frame sync stop requested");
        }
        self.state = LoopState::Idle;
    }

    /// Run one tick
    pub fn tick(
        &self,
        sync: &mut SyncState,
        now_ms: f64,
        primary: &mut dyn PlaybackClock,
        secondary: Option<&mut dyn PlaybackClock>,
    ) -> TickReport {
        let mut report = TickReport {
            reschedule: self.is_running(),
            ..TickReport::default()
        };

        let elapsed = (now_ms - sync.last_tick_ms) / 1000.0;
        if elapsed.is_nan() {
            tracing::warn!("Frame sync: unusable timestamp {}ms, skipping tick", now_ms);
            return report;
        }
        if elapsed < 0.0 {
            // Host clock went backwards; measure from here on
            tracing::warn!("Frame sync: clock moved back {}s, rebasing", -elapsed);
            sync.last_tick_ms = now_ms;
            return report;
        }

        if elapsed >= self.min_interval_secs() {
            primary.advance(elapsed);
            sync.last_tick_ms = now_ms;
            report.advanced_by = Some(elapsed);
            tracing::trace!("Frame sync: primary +{:.3}s -> {:.3}s", elapsed, primary.position());

            if let Some(secondary) = secondary {
                let drift = (secondary.position() - primary.position()).abs();
                if drift > DRIFT_THRESHOLD_SECS {
                    tracing::debug!("Frame sync: drift {:.3}s, resyncing secondary clock", drift);
                    secondary.set_position(primary.position());
                    report.resynced = true;
                }
            }
        }

        report
    }
}

impl Default for FrameSync {
    fn default() -> Self {
        Self::new()
    }
}
