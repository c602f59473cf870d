//! Player Configuration

use serde::Deserialize;
use videomaster_layout::FitPolicy;
use videomaster_media::DEFAULT_TARGET_FPS;

/// Player configuration options
///
/// Keys follow the JavaScript-facing camelCase names, so a config object
/// written for the web build can be parsed as is. Unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerConfig {
    /// Media source URL
    pub src: String,

    /// Restart when playback ends
    #[serde(rename = "loop")]
    pub loop_playback: bool,

    pub muted: bool,

    /// Volume (0.0 to 1.0)
    pub volume: f64,

    /// How the media is fitted into the container
    pub object_fit: FitPolicy,

    /// Render frames through a canvas with a separate audio element
    pub use_canvas: bool,

    /// Force canvas rendering on iPhone/iPad/iPod
    #[serde(rename = "forceCanvasOniOS")]
    pub force_canvas_on_ios: bool,

    /// Rewind to the start when playback ends
    pub reset_on_ended: bool,

    /// Container event that starts playback
    pub trigger: Trigger,

    /// Allow pausing once started
    pub can_pause: bool,

    /// Enable keyboard shortcuts
    pub shortcut: bool,

    /// Seconds to seek per arrow key press
    pub seek_factor: f64,

    /// Host hint passed through for DOM wiring (`playsinline` attribute)
    pub plays_inline: bool,

    /// Host hint passed through for DOM wiring: render the control bar
    pub controls: bool,

    /// Host hint passed through for DOM wiring: offer the fullscreen button
    pub allow_fullscreen: bool,

    /// Minimum canvas frame-step rate
    pub target_fps: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            src: String::new(),
            loop_playback: false,
            muted: false,
            volume: 1.0,
            object_fit: FitPolicy::Contain,
            use_canvas: false,
            force_canvas_on_ios: true,
            reset_on_ended: true,
            trigger: Trigger::Click,
            can_pause: true,
            shortcut: true,
            seek_factor: 5.0,
            plays_inline: true,
            controls: true,
            allow_fullscreen: false,
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}

impl PlayerConfig {
    /// Default configuration for a source
    pub fn with_src(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the type system cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::InvalidValue {
                key: "volume",
                reason: format!("{} is outside 0..=1", self.volume),
            });
        }
        if !self.seek_factor.is_finite() || self.seek_factor < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "seekFactor",
                reason: format!("{} is not a non-negative number", self.seek_factor),
            });
        }
        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "targetFps",
                reason: format!("{} is not a positive number", self.target_fps),
            });
        }
        Ok(())
    }

    /// Whether frames go through the canvas on this platform
    pub fn canvas_enabled(&self, platform: &Platform) -> bool {
        self.use_canvas || (self.force_canvas_on_ios && platform.is_ios)
    }
}

/// Container event that triggers playback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Trigger {
    #[default]
    #[serde(rename = "click")]
    Click,
    #[serde(rename = "dblclick")]
    DoubleClick,
    #[serde(rename = "mouseenter")]
    MouseEnter,
    #[serde(rename = "touchstart")]
    TouchStart,
}

impl Trigger {
    /// DOM event name
    pub fn event_name(&self) -> &'static str {
        match self {
            Trigger::Click => "click",
            Trigger::DoubleClick => "dblclick",
            Trigger::MouseEnter => "mouseenter",
            Trigger::TouchStart => "touchstart",
        }
    }
}

/// Host platform traits that change player behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Platform {
    pub is_ios: bool,
}

impl Platform {
    /// Sniff a browser user agent string
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        Self {
            is_ios: ["iphone", "ipad", "ipod"].iter().any(|device| ua.contains(device)),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid \"{key}\" value: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
