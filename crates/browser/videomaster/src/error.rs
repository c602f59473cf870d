//! Player errors

use videomaster_media::MediaError;

use crate::ConfigError;

/// Player error
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Video source is not specified")]
    EmptySource,

    #[error("Canvas rendering needs an audio element to carry sound")]
    MissingAudio,

    #[error("currentTime {requested} is outside the video duration {duration}")]
    CurrentTimeOutOfRange { requested: f64, duration: f64 },

    #[error("Volume must be a number between 0 and 1 (inclusive), got {0}")]
    VolumeOutOfRange(f64),

    #[error("Cannot allocate a {0}x{1} canvas surface")]
    Surface(u32, u32),
}
