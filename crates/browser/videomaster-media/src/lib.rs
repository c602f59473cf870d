//! VideoMaster Media
//!
//! Playback plumbing for canvas-rendered video.
//!
//! Features:
//! - Playback clocks and host media handles
//! - Headless media elements (video, audio)
//! - Decoded video frames
//! - Repaint-driven and interval frame scheduling
//! - Frame-sync loop keeping audio locked to a software-stepped video

pub mod clock;
pub mod element;
pub mod frame;
pub mod scheduler;
pub mod sync;

pub use clock::{MediaHandle, PlaybackClock};
pub use element::{MediaElement, MediaKind, MediaProperties, PlaybackState, ReadyState};
pub use frame::VideoFrame;
pub use scheduler::{
    FrameHandle, FrameScheduler, HostCapabilities, IntervalScheduler, RepaintScheduler,
    SchedulerKind, select_scheduler,
};
pub use sync::{DEFAULT_TARGET_FPS, DRIFT_THRESHOLD_SECS, FrameSync, LoopState, SyncState, TickReport};

/// Media error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("No frame scheduler available: host has neither repaint callbacks nor timers")]
    SchedulerUnavailable,

    #[error("Invalid target frame rate: {0}")]
    InvalidFrameRate(f64),

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),
}
