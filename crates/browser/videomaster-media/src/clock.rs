//! Playback clocks
//!
//! The seams between the player and the host media runtime.

use videomaster_layout::IntrinsicSize;

use crate::VideoFrame;

/// A readable and writable playback position for one stream.
///
/// In canvas mode two clocks coexist. The primary clock is the video
/// element, stepped by software rather than by native playback. The
/// secondary clock is the audio element, which plays natively and is
/// nudged back when it drifts.
pub trait PlaybackClock {
    /// Current position in seconds
    fn position(&self) -> f64;

    /// Seek to a position in seconds
    fn set_position(&mut self, seconds: f64);

    /// Whether the stream is natively playing
    fn is_playing(&self) -> bool;

    /// Move the position forward by `seconds`
    fn advance(&mut self, seconds: f64) {
        let position = self.position();
        self.set_position(position + seconds);
    }
}

/// A host media element (video or audio) the player drives
pub trait MediaHandle: PlaybackClock {
    /// Point the element at a new source and start loading it
    fn load(&mut self, src: &str);

    /// Start native playback
    fn play(&mut self);

    /// Pause native playback
    fn pause(&mut self);

    fn set_muted(&mut self, muted: bool);

    fn muted(&self) -> bool;

    fn set_volume(&mut self, volume: f64);

    fn volume(&self) -> f64;

    /// Duration in seconds, NaN until metadata loads
    fn duration(&self) -> f64;

    /// Natural pixel size; zero until metadata loads
    fn intrinsic_size(&self) -> IntrinsicSize;

    /// Most recently decoded frame, if the element carries video
    fn current_frame(&self) -> Option<&VideoFrame>;
}
