//! Player - Main entry point
//!
//! All host-driven operations take the host timestamp (`now_ms`) as an
//! argument. The player never reads a clock itself.

use videomaster_layout::{LayoutResult, SurfaceSize, Viewport, try_resolve};
use videomaster_media::{
    FrameHandle, FrameScheduler, FrameSync, HostCapabilities, MediaHandle, PlaybackClock,
    SyncState, TickReport, select_scheduler,
};

use crate::{FrameSurface, Platform, PlayerConfig, PlayerError};

/// What the host environment looks like at construction time
#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    pub user_agent: String,
    /// Container box
    pub viewport: Viewport,
    pub capabilities: HostCapabilities,
}

/// Player flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// The trigger event has fired at least once
    pub triggered: bool,
    pub playing: bool,
    pub ended: bool,
    /// A layout has been resolved for the current source
    pub sized: bool,
    /// A resize arrived before metadata and is waiting for it
    pub resize_pending: bool,
}

/// Keyboard shortcut keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    Other(u32),
}

impl Key {
    /// Map a legacy DOM `keyCode`
    pub fn from_key_code(code: u32) -> Self {
        match code {
            32 => Key::Space,
            37 => Key::ArrowLeft,
            39 => Key::ArrowRight,
            other => Key::Other(other),
        }
    }
}

/// The VideoMaster player
pub struct VideoMaster<M: MediaHandle> {
    config: PlayerConfig,
    canvas: bool,
    state: PlayerState,
    viewport: Viewport,
    layout: Option<LayoutResult>,
    muted: bool,
    volume: f64,

    video: M,
    audio: Option<M>,
    surface: Option<FrameSurface>,

    scheduler: Box<dyn FrameScheduler>,
    frame_sync: FrameSync,
    sync_state: Option<SyncState>,
    pending_frame: Option<FrameHandle>,
}

impl<M: MediaHandle> VideoMaster<M> {
    /// Create a player around host media elements.
    ///
    /// `audio` is only used in canvas mode, where it is required.
    pub fn new(
        config: PlayerConfig,
        host: HostEnv,
        mut video: M,
        audio: Option<M>,
    ) -> Result<Self, PlayerError> {
        config.validate()?;
        if config.src.is_empty() {
            return Err(PlayerError::EmptySource);
        }

        let platform = Platform::from_user_agent(&host.user_agent);
        let canvas = config.canvas_enabled(&platform);
        let scheduler = select_scheduler(host.capabilities)?;
        let frame_sync = FrameSync::with_target_fps(config.target_fps)?;

        let audio = if canvas {
            let mut audio = audio.ok_or(PlayerError::MissingAudio)?;
            audio.set_volume(config.volume);
            audio.set_muted(config.muted);
            audio.load(&config.src);
            Some(audio)
        } else {
            None
        };

        // In canvas mode the video is only a frame source
        video.set_volume(config.volume);
        video.set_muted(canvas || config.muted);
        video.load(&config.src);

        tracing::info!(
            "VideoMaster {} ready: {} ({}, object-fit {}, {:?} scheduler)",
            crate::VERSION,
            config.src,
            if canvas { "canvas" } else { "video" },
            config.object_fit,
            scheduler.kind()
        );

        Ok(Self {
            muted: config.muted,
            volume: config.volume,
            config,
            canvas,
            state: PlayerState::default(),
            viewport: host.viewport,
            layout: None,
            video,
            audio,
            surface: None,
            scheduler,
            frame_sync,
            sync_state: None,
            pending_frame: None,
        })
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    /// Handle the configured trigger event on the container
    pub fn trigger(&mut self, now_ms: f64) -> Result<(), PlayerError> {
        if self.state.triggered && self.config.can_pause {
            return self.toggle_play(now_ms);
        }
        self.state.triggered = true;
        self.play(now_ms)
    }

    pub fn play(&mut self, now_ms: f64) -> Result<(), PlayerError> {
        self.state.playing = true;

        if !self.state.sized {
            self.update_size()?;
        }

        if self.state.ended {
            self.state.ended = false;
            self.go_to(0.0);
        }

        let muted = self.muted;
        if self.canvas {
            self.start_loop(now_ms)?;
        }
        let target = self.target_mut();
        target.play();
        target.set_muted(muted);
        Ok(())
    }

    /// Pause. Returns false when pausing is disabled.
    ///
    /// In canvas mode the frame-sync loop winds down on its next tick.
    pub fn pause(&mut self) -> bool {
        if !self.config.can_pause {
            return false;
        }
        self.state.playing = false;
        self.frame_sync.stop();
        self.target_mut().pause();
        true
    }

    /// Toggle between play and pause, once triggered
    pub fn toggle_play(&mut self, now_ms: f64) -> Result<(), PlayerError> {
        if !self.state.triggered {
            return Ok(());
        }
        if self.state.playing {
            self.pause();
            Ok(())
        } else {
            self.play(now_ms)
        }
    }

    /// Seek the video and bring the audio along
    pub fn go_to(&mut self, seconds: f64) {
        self.video.set_position(seconds);
        self.sync_audio();
    }

    /// Called when the video reaches its end
    pub fn on_ended(&mut self, now_ms: f64) -> Result<(), PlayerError> {
        self.state.ended = true;

        if self.config.loop_playback {
            tracing::debug!("Looping {}", self.config.src);
            return self.play(now_ms);
        }

        self.state.playing = false;
        self.frame_sync.stop();
        self.target_mut().pause();
        if self.config.reset_on_ended {
            self.go_to(0.0);
        }
        Ok(())
    }

    /// Keyboard shortcuts: space toggles, arrows seek by `seekFactor`
    pub fn handle_key(&mut self, key: Key, now_ms: f64) -> Result<(), PlayerError> {
        if !self.config.shortcut || !self.state.triggered {
            return Ok(());
        }
        match key {
            Key::Space => self.toggle_play(now_ms)?,
            Key::ArrowLeft => self.go_to(self.current_time() - self.config.seek_factor),
            Key::ArrowRight => self.go_to(self.current_time() + self.config.seek_factor),
            Key::Other(_) => {}
        }
        Ok(())
    }

    /// Seek to a fraction of the duration (progress bar click)
    pub fn seek_fraction(&mut self, fraction: f64) {
        let duration = self.duration();
        if !duration.is_finite() || fraction.is_nan() {
            return;
        }
        self.go_to(duration * fraction.clamp(0.0, 1.0));
    }

    /// Switch to a new source. Keeps playing unless `force_pause`.
    pub fn load(&mut self, src: &str, force_pause: bool, now_ms: f64) -> Result<(), PlayerError> {
        if src.is_empty() {
            return Err(PlayerError::EmptySource);
        }

        let was_playing = self.state.playing;
        self.recalibrate();

        self.config.src = src.to_string();
        self.video.load(src);
        if let Some(audio) = self.audio.as_mut() {
            audio.load(src);
        }
        tracing::debug!("Loaded {}", src);

        if was_playing && !force_pause {
            self.play(now_ms)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    pub fn current_time(&self) -> f64 {
        self.video.position()
    }

    pub fn set_current_time(&mut self, seconds: f64) -> Result<(), PlayerError> {
        let duration = self.duration();
        if !seconds.is_finite() || seconds > duration {
            return Err(PlayerError::CurrentTimeOutOfRange { requested: seconds, duration });
        }
        self.go_to(seconds);
        Ok(())
    }

    pub fn duration(&self) -> f64 {
        self.video.duration()
    }

    /// Played fraction in 0..=1, 0 while the duration is unknown
    pub fn progress(&self) -> f64 {
        let duration = self.duration();
        if duration.is_finite() && duration > 0.0 {
            (self.current_time() / duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn paused(&self) -> bool {
        !self.state.playing
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.target_mut().set_muted(muted);
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f64) -> Result<(), PlayerError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(PlayerError::VolumeOutOfRange(volume));
        }
        self.volume = volume;
        self.target_mut().set_volume(volume);
        Ok(())
    }

    pub fn src(&self) -> &str {
        &self.config.src
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Frames are rendered through the canvas surface
    pub fn is_canvas(&self) -> bool {
        self.canvas
    }

    pub fn video(&self) -> &M {
        &self.video
    }

    /// Host access to the video element (metadata, decoded frames)
    pub fn video_mut(&mut self) -> &mut M {
        &mut self.video
    }

    pub fn audio(&self) -> Option<&M> {
        self.audio.as_ref()
    }

    pub fn audio_mut(&mut self) -> Option<&mut M> {
        self.audio.as_mut()
    }

    // ------------------------------------------------------------------
    // Layout and rendering
    // ------------------------------------------------------------------

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last resolved layout
    pub fn layout(&self) -> Option<LayoutResult> {
        self.layout
    }

    pub fn surface(&self) -> Option<&FrameSurface> {
        self.surface.as_ref()
    }

    /// Container resized
    pub fn resize(&mut self, viewport: Viewport) -> Result<Option<LayoutResult>, PlayerError> {
        self.viewport = viewport;
        self.update_size()
    }

    /// Video metadata became available
    pub fn on_metadata_loaded(&mut self) -> Result<Option<LayoutResult>, PlayerError> {
        self.update_size()
    }

    /// Re-run object-fit layout. `None` while the video size is unknown or
    /// the container has no area; the resize is remembered and retried on
    /// the next metadata or resize event.
    pub fn update_size(&mut self) -> Result<Option<LayoutResult>, PlayerError> {
        if self.viewport.is_empty() {
            tracing::debug!("Container {:?} has no area, deferring layout", self.viewport);
            self.state.resize_pending = true;
            return Ok(None);
        }

        let intrinsic = self.video.intrinsic_size();
        let Some(layout) = try_resolve(self.viewport, intrinsic, self.config.object_fit) else {
            tracing::debug!("Video size unknown, deferring layout");
            self.state.resize_pending = true;
            return Ok(None);
        };

        self.layout = Some(layout);
        if self.canvas {
            let size = SurfaceSize::from_layout(&layout);
            match self.surface.as_mut() {
                Some(surface) => surface.resize(size)?,
                None => self.surface = Some(FrameSurface::new(size)?),
            }
            self.draw_frame()?;
        }

        self.state.sized = true;
        self.state.resize_pending = false;
        tracing::debug!("Layout {:?} in {:?}", layout, self.viewport);
        Ok(Some(layout))
    }

    /// Copy the current video frame onto the canvas. Returns false when
    /// there is no surface or no decoded frame yet.
    pub fn draw_frame(&mut self) -> Result<bool, PlayerError> {
        match (self.surface.as_mut(), self.video.current_frame()) {
            (Some(surface), Some(frame)) => {
                surface.draw_frame(frame)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Give the scheduler a chance to fire. Call on every repaint or
    /// timer wake. Returns the tick report when a tick ran.
    pub fn poll_frame(&mut self, now_ms: f64) -> Result<Option<TickReport>, PlayerError> {
        match (self.scheduler.poll(now_ms), self.pending_frame) {
            (Some(fired), Some(pending)) if fired == pending => {
                self.pending_frame = None;
                self.roll(now_ms).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// The frame-sync loop has an activation in flight
    pub fn is_loop_active(&self) -> bool {
        self.sync_state.is_some()
    }

    pub fn frame_sync(&self) -> &FrameSync {
        &self.frame_sync
    }

    fn start_loop(&mut self, now_ms: f64) -> Result<(), PlayerError> {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.sync_state = Some(self.frame_sync.start(now_ms));
        self.roll(now_ms)?;
        Ok(())
    }

    // Roll the frames forward like a film
    fn roll(&mut self, now_ms: f64) -> Result<TickReport, PlayerError> {
        let Some(sync_state) = self.sync_state.as_mut() else {
            return Ok(TickReport::default());
        };

        let secondary: Option<&mut dyn PlaybackClock> = match self.audio.as_mut() {
            Some(audio) => Some(audio),
            None => None,
        };
        let report = self.frame_sync.tick(sync_state, now_ms, &mut self.video, secondary);

        if report.advanced_by.is_some() {
            self.draw_frame()?;
        }

        if report.reschedule {
            self.pending_frame = Some(self.scheduler.request_frame(now_ms));
        } else {
            if let Some(handle) = self.pending_frame.take() {
                self.scheduler.cancel_frame(handle);
            }
            self.sync_state = None;
            tracing::debug!("Frame sync stopped at {:.3}s", self.video.position());
        }
        Ok(report)
    }

    // Only reset what's necessary for a new source
    fn recalibrate(&mut self) {
        self.frame_sync.stop();
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.sync_state = None;
        self.layout = None;
        self.state = PlayerState {
            triggered: self.state.triggered,
            ..PlayerState::default()
        };
    }

    fn sync_audio(&mut self) {
        let position = self.video.position();
        if let Some(audio) = self.audio.as_mut() {
            audio.set_position(position);
        }
    }

    /// The element that carries sound
    fn target_mut(&mut self) -> &mut M {
        match self.audio.as_mut() {
            Some(audio) => audio,
            None => &mut self.video,
        }
    }
}

impl<M: MediaHandle + std::fmt::Debug> std::fmt::Debug for VideoMaster<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoMaster")
            .field("src", &self.config.src)
            .field("canvas", &self.canvas)
            .field("state", &self.state)
            .field("layout", &self.layout)
            .field("video", &self.video)
            .field("audio", &self.audio)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use videomaster_layout::{FitPolicy, IntrinsicSize};
    use videomaster_media::{MediaElement, VideoFrame};

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X)";

    fn host(user_agent: &str) -> HostEnv {
        HostEnv {
            user_agent: user_agent.to_string(),
            viewport: Viewport::new(1000.0, 200.0),
            capabilities: HostCapabilities::default(),
        }
    }

    fn video_player(config: PlayerConfig) -> VideoMaster<MediaElement> {
        VideoMaster::new(config, host("desktop"), MediaElement::video(), None).unwrap()
    }

    fn canvas_player(config: PlayerConfig) -> VideoMaster<MediaElement> {
        VideoMaster::new(config, host(IPHONE), MediaElement::video(), Some(MediaElement::audio()))
            .unwrap()
    }

    fn load_metadata(player: &mut VideoMaster<MediaElement>, duration: f64) {
        player.video_mut().on_metadata_loaded(duration, 100, 100);
        player.video_mut().set_frame(VideoFrame::solid(4, 4, [0, 128, 255, 255]).unwrap());
        if let Some(audio) = player.audio_mut() {
            audio.on_metadata_loaded(duration, 0, 0);
        }
    }

    #[test]
    fn test_construction_errors() {
        let err = VideoMaster::new(PlayerConfig::default(), host("desktop"), MediaElement::video(), None);
        assert!(matches!(err, Err(PlayerError::EmptySource)));

        let err = VideoMaster::new(PlayerConfig::with_src("a.mp4"), host(IPHONE), MediaElement::video(), None);
        assert!(matches!(err, Err(PlayerError::MissingAudio)));

        let mut no_scheduler = host("desktop");
        no_scheduler.capabilities = HostCapabilities { repaint_callbacks: false, timers: false };
        let err = VideoMaster::new(PlayerConfig::with_src("a.mp4"), no_scheduler, MediaElement::video(), None);
        assert!(matches!(err, Err(PlayerError::Media(_))));
    }

    #[test]
    fn test_canvas_mode_mutes_video() {
        let player = canvas_player(PlayerConfig::with_src("a.mp4"));
        assert!(player.is_canvas());
        assert!(player.video().muted());
        assert!(!player.audio().unwrap().muted());
        assert_eq!(player.audio().unwrap().properties.src, "a.mp4");
    }

    #[test]
    fn test_video_mode_ignores_audio() {
        let player = VideoMaster::new(
            PlayerConfig::with_src("a.mp4"),
            host("desktop"),
            MediaElement::video(),
            Some(MediaElement::audio()),
        )
        .unwrap();
        assert!(!player.is_canvas());
        assert!(player.audio().is_none());
    }

    #[test]
    fn test_trigger_then_toggle() {
        let mut player = video_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 10.0);

        // Space before the first trigger is ignored
        player.handle_key(Key::Space, 0.0).unwrap();
        assert!(player.paused());

        player.trigger(0.0).unwrap();
        assert!(!player.paused());
        assert!(player.video().is_playing());

        player.trigger(10.0).unwrap();
        assert!(player.paused());
        assert!(!player.video().is_playing());
    }

    #[test]
    fn test_cannot_pause() {
        let mut config = PlayerConfig::with_src("a.mp4");
        config.can_pause = false;
        let mut player = video_player(config);
        load_metadata(&mut player, 10.0);

        player.trigger(0.0).unwrap();
        assert!(!player.pause());
        player.trigger(1.0).unwrap();
        assert!(!player.paused());
    }

    #[test]
    fn test_layout_deferred_until_metadata() {
        let mut config = PlayerConfig::with_src("a.mp4");
        config.object_fit = FitPolicy::Cover;
        let mut player = canvas_player(config);

        assert_eq!(player.update_size().unwrap(), None);
        assert!(player.state().resize_pending);
        assert!(player.surface().is_none());

        load_metadata(&mut player, 10.0);
        let layout = player.on_metadata_loaded().unwrap().unwrap();
        assert_eq!(layout, LayoutResult { width: 1000.0, height: 1000.0, top: -400.0, left: 0.0 });
        assert!(!player.state().resize_pending);

        let surface = player.surface().unwrap();
        assert_eq!(surface.size(), SurfaceSize::new(1000, 1000));
        let [r, g, b, a] = surface.pixel(500, 500).unwrap();
        assert!(r <= 1 && g.abs_diff(128) <= 1 && b >= 254 && a == 255);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut player = video_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 10.0);

        let layout = player.resize(Viewport::new(1000.0, 200.0)).unwrap().unwrap();
        assert_eq!(layout.left, 400.0);

        let layout = player.resize(Viewport::new(200.0, 1000.0)).unwrap().unwrap();
        assert_eq!(layout, LayoutResult { width: 200.0, height: 200.0, top: 400.0, left: 0.0 });
        assert_eq!(player.video().intrinsic_size(), IntrinsicSize::new(100.0, 100.0));
        assert!(player.surface().is_none());
    }

    #[test]
    fn test_empty_container_defers_layout() {
        let mut player = canvas_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 10.0);

        assert_eq!(player.resize(Viewport::new(0.0, 300.0)).unwrap(), None);
        assert!(player.state().resize_pending);
        assert!(!player.state().sized);
        assert!(player.surface().is_none());

        let layout = player.resize(Viewport::new(300.0, 300.0)).unwrap().unwrap();
        assert_eq!(layout, LayoutResult { width: 300.0, height: 300.0, top: 0.0, left: 0.0 });
        assert!(!player.state().resize_pending);
        assert_eq!(player.surface().unwrap().size(), SurfaceSize::new(300, 300));
    }

    #[test]
    fn test_canvas_play_starts_loop() {
        let mut player = canvas_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 10.0);

        player.trigger(1000.0).unwrap();
        assert!(player.is_loop_active());
        assert!(player.audio().unwrap().is_playing());
        // The video is stepped, never played natively
        assert!(!player.video().is_playing());

        let report = player.poll_frame(1040.0).unwrap().unwrap();
        assert_eq!(report.advanced_by, Some(0.04));
        assert!((player.current_time() - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_pause_takes_effect_next_tick() {
        let mut player = canvas_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 10.0);

        player.trigger(0.0).unwrap();
        assert!(player.pause());
        assert!(player.is_loop_active());
        assert!(!player.audio().unwrap().is_playing());

        let report = player.poll_frame(50.0).unwrap().unwrap();
        assert!(report.advanced_by.is_some());
        assert!(!report.reschedule);
        assert!(!player.is_loop_active());
        assert_eq!(player.poll_frame(100.0).unwrap(), None);
    }

    #[test]
    fn test_seek_syncs_audio() {
        let mut player = canvas_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 30.0);

        player.go_to(12.5);
        assert_eq!(player.current_time(), 12.5);
        assert_eq!(player.audio().unwrap().position(), 12.5);

        player.seek_fraction(0.5);
        assert_eq!(player.current_time(), 15.0);
        assert_eq!(player.progress(), 0.5);
    }

    #[test]
    fn test_arrow_keys_seek() {
        let mut player = video_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 30.0);
        player.trigger(0.0).unwrap();

        player.handle_key(Key::from_key_code(39), 0.0).unwrap();
        assert_eq!(player.current_time(), 5.0);
        player.handle_key(Key::ArrowRight, 0.0).unwrap();
        player.handle_key(Key::ArrowLeft, 0.0).unwrap();
        assert_eq!(player.current_time(), 5.0);
        player.handle_key(Key::Other(13), 0.0).unwrap();
        assert_eq!(player.current_time(), 5.0);
    }

    #[test]
    fn test_property_validation() {
        let mut player = video_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 30.0);

        assert!(matches!(
            player.set_current_time(31.0),
            Err(PlayerError::CurrentTimeOutOfRange { .. })
        ));
        assert!(player.set_current_time(f64::NAN).is_err());
        player.set_current_time(29.0).unwrap();
        assert_eq!(player.current_time(), 29.0);

        assert!(matches!(player.set_volume(1.2), Err(PlayerError::VolumeOutOfRange(_))));
        player.set_volume(0.25).unwrap();
        assert_eq!(player.volume(), 0.25);
        assert_eq!(player.video().volume(), 0.25);

        player.set_muted(true);
        assert!(player.muted());
        assert!(player.video().muted());
    }

    #[test]
    fn test_ended_resets() {
        let mut player = video_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 10.0);
        player.trigger(0.0).unwrap();
        player.go_to(10.0);

        player.on_ended(0.0).unwrap();
        assert!(player.paused());
        assert!(player.state().ended);
        assert_eq!(player.current_time(), 0.0);

        // Playing again clears the ended flag
        player.play(0.0).unwrap();
        assert!(!player.state().ended);
    }

    #[test]
    fn test_ended_loops() {
        let mut config = PlayerConfig::with_src("a.mp4");
        config.loop_playback = true;
        let mut player = canvas_player(config);
        load_metadata(&mut player, 10.0);
        player.trigger(0.0).unwrap();
        player.go_to(10.0);

        player.on_ended(500.0).unwrap();
        assert!(!player.paused());
        assert_eq!(player.current_time(), 0.0);
        assert!(player.is_loop_active());
    }

    #[test]
    fn test_load_new_source() {
        let mut player = canvas_player(PlayerConfig::with_src("a.mp4"));
        load_metadata(&mut player, 10.0);
        player.trigger(0.0).unwrap();

        assert!(matches!(player.load("", false, 0.0), Err(PlayerError::EmptySource)));

        player.load("b.mp4", true, 100.0).unwrap();
        assert_eq!(player.src(), "b.mp4");
        assert!(player.paused());
        assert!(!player.is_loop_active());
        assert!(player.layout().is_none());
        assert!(player.state().triggered);
        assert_eq!(player.audio().unwrap().properties.src, "b.mp4");

        player.play(200.0).unwrap();
        player.load("c.mp4", false, 300.0).unwrap();
        assert!(!player.paused());
        assert!(player.is_loop_active());
    }
}
