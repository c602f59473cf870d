//! VideoMaster
//!
//! Click-to-play, full-bleed video player.
//!
//! The player wraps a host video element and, on platforms where native
//! inline video misbehaves (iOS), renders frames onto a canvas while a
//! separate audio element carries the sound. It owns:
//! - Typed, validated configuration
//! - Object-fit layout of the video or canvas inside its container
//! - The play/pause/seek/end state machine
//! - The frame-sync loop that steps the hidden video and keeps audio in sync

mod canvas;
mod config;
mod error;
mod player;

pub use canvas::FrameSurface;
pub use config::{ConfigError, Platform, PlayerConfig, Trigger};
pub use error::PlayerError;
pub use player::{HostEnv, Key, PlayerState, VideoMaster};

pub use videomaster_layout::{FitPolicy, IntrinsicSize, LayoutResult, SurfaceSize, Viewport};
pub use videomaster_media::{
    HostCapabilities, MediaElement, MediaHandle, PlaybackClock, TickReport, VideoFrame,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
