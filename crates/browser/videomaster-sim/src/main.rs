//! VideoMaster Simulator - Main Entry Point
//!
//! Plays simulated media through the player on a smol timer, the way a
//! browser host would drive it from its event loop.

use std::time::{Duration, Instant};

use anyhow::Context;
use videomaster::{
    HostCapabilities, HostEnv, MediaElement, PlaybackClock, PlayerConfig, VideoFrame, VideoMaster,
    Viewport,
};

const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 12_2 like Mac OS X) AppleWebKit/605.1.15";

/// Host event loop period
const HOST_TICK: Duration = Duration::from_millis(16);

/// Native audio runs slightly fast so resyncs show up in the log
const AUDIO_RATE: f64 = 1.02;

const CLIP_SECS: f64 = 4.0;

/// Looping configs stop here
const MAX_RUN_MS: f64 = 30_000.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            PlayerConfig::from_json(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => PlayerConfig::with_src("simulated.mp4"),
    };

    tracing::info!("VideoMaster simulator v{}", videomaster::VERSION);

    let host = HostEnv {
        user_agent: IPAD.to_string(),
        viewport: Viewport::new(1280.0, 720.0),
        capabilities: HostCapabilities::default(),
    };
    let mut player = VideoMaster::new(config, host, MediaElement::video(), Some(MediaElement::audio()))?;

    player.video_mut().on_metadata_loaded(CLIP_SECS, 1920, 1080);
    player.video_mut().set_frame(VideoFrame::solid(192, 108, [24, 96, 160, 255])?);
    if let Some(audio) = player.audio_mut() {
        audio.on_metadata_loaded(CLIP_SECS, 0, 0);
    }
    if let Some(layout) = player.on_metadata_loaded()? {
        tracing::info!(
            "Layout {}x{} at ({}, {})",
            layout.width,
            layout.height,
            layout.left,
            layout.top
        );
    }

    smol::block_on(run(&mut player))?;

    tracing::info!(
        "Finished at {:.3}s (ended: {})",
        player.current_time(),
        player.state().ended
    );
    Ok(())
}

async fn run(player: &mut VideoMaster<MediaElement>) -> anyhow::Result<()> {
    let start = Instant::now();
    player.trigger(0.0)?;

    let mut ticks = 0usize;
    let mut resyncs = 0usize;
    let mut last = start;

    while player.state().playing {
        smol::Timer::after(HOST_TICK).await;

        let instant = Instant::now();
        let now_ms = instant.duration_since(start).as_secs_f64() * 1000.0;
        let step = instant.duration_since(last).as_secs_f64();
        last = instant;

        if let Some(audio) = player.audio_mut() {
            audio.update_time(step * AUDIO_RATE);
        }
        if !player.is_canvas() {
            // Native inline playback
            player.video_mut().update_time(step);
        }

        if let Some(report) = player.poll_frame(now_ms)? {
            if report.advanced_by.is_some() {
                ticks += 1;
            }
            if report.resynced {
                resyncs += 1;
                tracing::info!(
                    "Resynced audio to {:.3}s",
                    player.audio().map(|a| a.position()).unwrap_or_default()
                );
            }
        }

        if player.video().is_at_end() {
            tracing::info!("Ended after {} frames, {} resyncs", ticks, resyncs);
            player.on_ended(now_ms)?;
        }

        if now_ms > MAX_RUN_MS {
            tracing::info!("Stopping after {:.0}ms", now_ms);
            player.pause();
            break;
        }
    }

    Ok(())
}
