//! Headless runner: steps the effects core at a fixed 60 Hz against a
//! recording surface and logs what is on screen once per simulated second.
//!
//! Usage: `afterglow-native [frames] [abstract|scene] [seed]`

use afterglow_core::{
    AmbientEngine, AmbientParams, RecordingSurface, TriggerOutcome, ViewMode, Viewport,
};
use anyhow::Context;
use instant::Instant;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);
const FRAMES_PER_SECOND: u64 = 60;
const VIEWPORT: (f64, f64) = (1280.0, 720.0);

struct RunArgs {
    frames: u64,
    mode: ViewMode,
    seed: Option<u64>,
}

fn parse_args() -> anyhow::Result<RunArgs> {
    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("bad frame count `{s}`"))?,
        None => 600,
    };
    let mode = match args.next() {
        Some(s) => s.parse::<ViewMode>()?,
        None => ViewMode::Abstract,
    };
    let seed = match args.next() {
        Some(s) => Some(s.parse::<u64>().with_context(|| format!("bad seed `{s}`"))?),
        None => None,
    };
    Ok(RunArgs { frames, mode, seed })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;
    log::info!(
        "[native] {} frames in {} mode (seed {:?})",
        args.frames,
        args.mode,
        args.seed
    );

    let mut engine = AmbientEngine::new(AmbientParams {
        seed: args.seed,
        ..AmbientParams::default()
    });
    engine.resized(Viewport::new(VIEWPORT.0, VIEWPORT.1));
    engine.set_mode(args.mode);
    if args.mode == ViewMode::Scene {
        engine.set_hover_intent(true, Instant::now());
    }

    let mut surface = RecordingSurface::new();
    let start = Instant::now();
    let mut now = start;
    for frame in 0..args.frames {
        // A slow circle so the trail and spotlight have something to follow.
        let phase = frame as f64 / FRAMES_PER_SECOND as f64;
        engine.pointer_moved(
            VIEWPORT.0 / 2.0 + 200.0 * phase.cos(),
            VIEWPORT.1 / 2.0 + 120.0 * phase.sin(),
        );

        // Ask for a burst every half second; the cooldown decides.
        if frame % (FRAMES_PER_SECOND / 2) == 0 {
            if let TriggerOutcome::Launched(n) = engine.trigger_effect(now) {
                log::debug!("[native] frame {frame}: launched {n}");
            }
        }

        engine.tick(&mut surface, now);
        if frame % FRAMES_PER_SECOND == FRAMES_PER_SECOND - 1 {
            log::info!(
                "[native] t={:>5.1}s rockets={:>3} sparks={:>4} stars={:>3} fade={:.3} trail={:>2} discs={:>4} segments={:>2}",
                (now - start).as_secs_f64(),
                engine.fireworks().rockets(),
                engine.fireworks().sparks(),
                engine.stars().len(),
                engine.star_global_alpha(),
                engine.trail().len(),
                surface.discs(),
                surface.segments(),
            );
        }
        surface.reset_keep_last();
        now += FRAME;
    }

    engine.shutdown();
    log::info!("[native] done after {} ticks", engine.ticks());
    Ok(())
}
