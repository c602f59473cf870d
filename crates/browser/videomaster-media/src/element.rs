//! Media Elements
//!
//! Headless video and audio elements.

use videomaster_layout::IntrinsicSize;

use crate::{MediaHandle, PlaybackClock, VideoFrame};

/// Media playback state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No source set
    #[default]
    Idle,
    /// Loading media
    Loading,
    /// Ready to play
    Ready,
    /// Currently playing
    Playing,
    /// Paused
    Paused,
    /// Playback ended
    Ended,
}

/// Media ready state (HTML5 readyState)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    /// No data
    #[default]
    HaveNothing = 0,
    /// Metadata loaded
    HaveMetadata = 1,
    /// Current frame data available
    HaveCurrentData = 2,
}

/// Media element kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaKind {
    #[default]
    Video,
    Audio,
}

/// Media element properties
#[derive(Debug, Clone)]
pub struct MediaProperties {
    /// Source URL
    pub src: String,
    /// Duration in seconds (NaN until metadata loads)
    pub duration: f64,
    /// Current playback position in seconds
    pub current_time: f64,
    /// Volume (0.0 to 1.0)
    pub volume: f64,
    /// Muted state
    pub muted: bool,
    /// Width (for video)
    pub width: u32,
    /// Height (for video)
    pub height: u32,
}

impl Default for MediaProperties {
    fn default() -> Self {
        Self {
            src: String::new(),
            duration: f64::NAN,
            current_time: 0.0,
            volume: 1.0,
            muted: false,
            width: 0,
            height: 0,
        }
    }
}

/// Media element
#[derive(Debug, Default)]
pub struct MediaElement {
    /// Element kind
    pub kind: MediaKind,
    /// Playback state
    pub state: PlaybackState,
    /// Ready state
    pub ready_state: ReadyState,
    /// Properties
    pub properties: MediaProperties,
    /// Play was requested before metadata arrived
    play_pending: bool,
    frame: Option<VideoFrame>,
}

impl MediaElement {
    /// Create a new video element
    pub fn video() -> Self {
        Self {
            kind: MediaKind::Video,
            ..Default::default()
        }
    }

    /// Create a new audio element
    pub fn audio() -> Self {
        Self {
            kind: MediaKind::Audio,
            ..Default::default()
        }
    }

    /// Called when metadata is loaded
    pub fn on_metadata_loaded(&mut self, duration: f64, width: u32, height: u32) {
        self.properties.duration = duration;
        if self.kind == MediaKind::Video {
            self.properties.width = width;
            self.properties.height = height;
        }
        self.ready_state = self.ready_state.max(ReadyState::HaveMetadata);
        if self.state == PlaybackState::Loading {
            self.state = if self.play_pending {
                PlaybackState::Playing
            } else {
                PlaybackState::Ready
            };
            self.play_pending = false;
        }
    }

    /// Called when a new frame has been decoded
    pub fn set_frame(&mut self, frame: VideoFrame) {
        self.frame = Some(frame);
        self.ready_state = ReadyState::HaveCurrentData;
    }

    /// Native playback progress. Returns true when this call reached the end.
    pub fn update_time(&mut self, delta: f64) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.properties.current_time += delta;
        if self.is_at_end() {
            self.properties.current_time = self.properties.duration;
            self.state = PlaybackState::Ended;
            return true;
        }
        false
    }

    /// Position has reached a known duration
    pub fn is_at_end(&self) -> bool {
        let duration = self.properties.duration;
        duration.is_finite() && self.properties.current_time >= duration
    }

    /// Check if media is paused
    pub fn is_paused(&self) -> bool {
        self.state != PlaybackState::Playing
    }

    /// Check if media has ended
    pub fn is_ended(&self) -> bool {
        self.state == PlaybackState::Ended
    }
}

impl PlaybackClock for MediaElement {
    fn position(&self) -> f64 {
        self.properties.current_time
    }

    fn set_position(&mut self, seconds: f64) {
        let duration = self.properties.duration;
        let upper = if duration.is_finite() { duration } else { f64::INFINITY };
        self.properties.current_time = seconds.max(0.0).min(upper);
        if self.state == PlaybackState::Ended && self.properties.current_time < upper {
            self.state = PlaybackState::Paused;
        }
    }

    fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }
}

impl MediaHandle for MediaElement {
    fn load(&mut self, src: &str) {
        self.properties.src = src.to_string();
        self.properties.duration = f64::NAN;
        self.properties.current_time = 0.0;
        self.properties.width = 0;
        self.properties.height = 0;
        self.state = PlaybackState::Loading;
        self.ready_state = ReadyState::HaveNothing;
        self.play_pending = false;
        self.frame = None;
    }

    fn play(&mut self) {
        match self.state {
            PlaybackState::Ready | PlaybackState::Paused => self.state = PlaybackState::Playing,
            PlaybackState::Playing => {}
            PlaybackState::Ended => {
                // Restart from beginning
                self.properties.current_time = 0.0;
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Loading => self.play_pending = true,
            PlaybackState::Idle => tracing::warn!("play() on {:?} element without a source", self.kind),
        }
    }

    fn pause(&mut self) {
        self.play_pending = false;
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.properties.muted = muted;
    }

    fn muted(&self) -> bool {
        self.properties.muted
    }

    fn set_volume(&mut self, volume: f64) {
        self.properties.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f64 {
        self.properties.volume
    }

    fn duration(&self) -> f64 {
        self.properties.duration
    }

    fn intrinsic_size(&self) -> IntrinsicSize {
        IntrinsicSize::new(self.properties.width as f64, self.properties.height as f64)
    }

    fn current_frame(&self) -> Option<&VideoFrame> {
        self.frame.as_ref()
    }
}
