//! The simulation context and the per-tick driver.
//!
//! [`AmbientEngine`] owns every piece of animation state: pointer, viewport,
//! clock, trail, particles, stars, mode and timers. Hosts feed it input
//! events between ticks and call [`AmbientEngine::tick`] once per display
//! frame. Nothing here is global; a host can run several engines side by side.

use crate::config::AmbientParams;
use crate::constants::*;
use crate::error::AmbientError;
use crate::fireworks::Fireworks;
use crate::mode::{ModeController, PendingHide, ViewMode};
use crate::spotlight::Spotlight;
use crate::stars::StarField;
use crate::surface::{Surface, Viewport};
use crate::timer::{Cooldown, TimerToken};
use crate::trail::Trail;
use glam::DVec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Result of a burst request. Only used for logging and tests; the public
/// trigger contract has no return value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    Launched(usize),
    CoolingDown,
    SceneMode,
    NotReady,
}

pub struct AmbientEngine {
    params: AmbientParams,
    viewport: Viewport,
    pointer: DVec2,
    time: f64,
    ticks: u64,
    trail: Trail,
    fireworks: Fireworks,
    stars: StarField,
    modes: ModeController,
    cooldown: Cooldown,
    rng: StdRng,
}

impl AmbientEngine {
    pub fn new(params: AmbientParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            params,
            viewport: Viewport::default(),
            pointer: DVec2::from_array(POINTER_START),
            time: 0.0,
            ticks: 0,
            trail: Trail::new(),
            fireworks: Fireworks::new(),
            stars: StarField::new(),
            modes: ModeController::new(),
            cooldown: Cooldown::new(Duration::from_millis(TRIGGER_COOLDOWN_MS)),
            rng,
        }
    }

    // ---------------- Input capture ----------------

    /// Record a pointer sample; it feeds both the spotlight and the trail.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
        self.trail.push(self.pointer);
    }

    /// New drawing-area size. Re-seeds the star field while in scene mode.
    pub fn resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        log::debug!("[input] viewport {}x{}", viewport.width, viewport.height);
        if self.modes.mode() == ViewMode::Scene {
            self.seed_stars();
        }
    }

    // ---------------- External signals ----------------

    /// Launch a firework burst unless cooling down, in scene mode, or the
    /// viewport has no area yet. Refusals leave every piece of state alone.
    pub fn trigger_effect(&mut self, now: Instant) -> TriggerOutcome {
        if !self.modes.can_trigger() {
            return TriggerOutcome::SceneMode;
        }
        if !self.viewport.is_ready() {
            return TriggerOutcome::NotReady;
        }
        if !self.cooldown.try_acquire(now) {
            return TriggerOutcome::CoolingDown;
        }
        let n = self
            .fireworks
            .launch(&mut self.rng, self.viewport, self.params.rocket_color);
        log::info!("[fx] burst: {} rockets", n);
        TriggerOutcome::Launched(n)
    }

    /// Feed the sticky hover timer. When leaving, the returned release must be
    /// scheduled by the host and reported via [`Self::expire_hover`].
    pub fn set_hover_intent(&mut self, hovering: bool, now: Instant) -> Option<PendingHide> {
        self.modes.hover.set(hovering, now)
    }

    pub fn expire_hover(&mut self, token: TimerToken) -> bool {
        self.modes.hover.expire(token)
    }

    /// Fire any wall-clock deadline that has passed.
    pub fn poll_timers(&mut self, now: Instant) {
        if self.modes.hover.poll(now) {
            log::debug!("[hover] released by poll");
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        if !self.modes.set_mode(mode) {
            return;
        }
        log::info!("[fx] mode -> {}", mode);
        // Resizes in abstract mode leave the field laid out for an old size.
        if mode == ViewMode::Scene && self.stars.seeded_for() != Some(self.viewport) {
            self.seed_stars();
        }
    }

    /// Drop pending timers and in-flight effects. Called by hosts on teardown.
    pub fn shutdown(&mut self) {
        if let Some(token) = self.modes.hover.cancel() {
            log::debug!("[hover] pending release #{} dropped", token.id());
        }
        self.cooldown.reset();
        self.fireworks.clear();
        self.trail.clear();
    }

    // ---------------- Render loop ----------------

    /// One frame: clear, advance the clock, then spotlight, trail, and either
    /// the star field (scene) or the fireworks (abstract).
    ///
    /// A surface that reports itself unavailable turns the whole tick into a
    /// no-op.
    pub fn tick(&mut self, surface: &mut impl Surface, now: Instant) {
        match surface.clear() {
            Ok(()) => {}
            Err(AmbientError::SurfaceUnavailable) => return,
            Err(e) => log::debug!("[loop] clear failed: {e}"),
        }
        self.time += TIME_STEP;
        self.ticks += 1;
        self.poll_timers(now);

        let spotlight = self.spotlight();
        if let Err(e) = surface.paint_spotlight(&spotlight) {
            log::debug!("[loop] spotlight skipped: {e}");
        }

        self.trail.update();
        self.trail
            .draw(surface, self.params.trail_line_width, self.params.trail_color);

        match self.modes.mode() {
            ViewMode::Scene => {
                self.stars.update(self.time, self.modes.hover.is_active());
                self.stars.draw(surface);
            }
            ViewMode::Abstract => {
                self.fireworks.update(&mut self.rng, self.params.spark_color);
                self.fireworks.draw(surface);
            }
        }
        log::trace!(
            "[loop] tick {} trail={} particles={}",
            self.ticks,
            self.trail.len(),
            self.fireworks.len()
        );
    }

    fn seed_stars(&mut self) {
        self.stars
            .seed(&mut self.rng, self.viewport, self.params.star_color);
    }

    // ---------------- Accessors ----------------

    pub fn spotlight(&self) -> Spotlight {
        Spotlight::at(self.pointer, self.time, self.params.spotlight_color)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn mode(&self) -> ViewMode {
        self.modes.mode()
    }

    pub fn hover_active(&self) -> bool {
        self.modes.hover.is_active()
    }

    pub fn star_global_alpha(&self) -> f64 {
        self.stars.global_alpha()
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn fireworks(&self) -> &Fireworks {
        &self.fireworks
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn engine() -> AmbientEngine {
        let mut e = AmbientEngine::new(AmbientParams {
            seed: Some(11),
            ..AmbientParams::default()
        });
        e.resized(Viewport::new(800.0, 600.0));
        e
    }

    struct Unavailable;

    impl Surface for Unavailable {
        fn clear(&mut self) -> Result<(), AmbientError> {
            Err(AmbientError::SurfaceUnavailable)
        }
        fn stroke_segment(
            &mut self,
            _: DVec2,
            _: DVec2,
            _: f64,
            _: crate::config::Rgb,
            _: f64,
        ) -> Result<(), AmbientError> {
            unreachable!()
        }
        fn fill_disc(
            &mut self,
            _: DVec2,
            _: f64,
            _: crate::config::Rgb,
            _: f64,
        ) -> Result<(), AmbientError> {
            unreachable!()
        }
        fn paint_spotlight(&mut self, _: &Spotlight) -> Result<(), AmbientError> {
            unreachable!()
        }
    }

    #[test]
    fn tick_order_in_abstract_mode() {
        let mut e = engine();
        let now = Instant::now();
        e.pointer_moved(10.0, 10.0);
        e.pointer_moved(20.0, 20.0);
        e.trigger_effect(now);
        let mut s = RecordingSurface::new();
        e.tick(&mut s, now);

        let kinds: Vec<u8> = s
            .commands
            .iter()
            .map(|c| match c {
                DrawCommand::Clear => 0,
                DrawCommand::Spotlight(_) => 1,
                DrawCommand::Segment { .. } => 2,
                DrawCommand::Disc { .. } => 3,
            })
            .collect();
        assert_eq!(&kinds[..3], &[0u8, 1, 2]);
        assert!(kinds[3..].iter().all(|k| *k == 3));
        assert_eq!(kinds.len(), 3 + 25);
        assert!((e.time() - TIME_STEP).abs() < 1e-12);
    }

    #[test]
    fn unavailable_surface_is_a_noop() {
        let mut e = engine();
        e.trigger_effect(Instant::now());
        e.tick(&mut Unavailable, Instant::now());
        assert_eq!(e.time(), 0.0);
        assert_eq!(e.ticks(), 0);
    }

    #[test]
    fn trigger_refusals_have_no_side_effects() {
        let mut e = AmbientEngine::new(AmbientParams {
            seed: Some(1),
            ..AmbientParams::default()
        });
        let now = Instant::now();
        assert_eq!(e.trigger_effect(now), TriggerOutcome::NotReady);
        e.resized(Viewport::new(800.0, 600.0));
        // NotReady did not start the cooldown.
        assert_eq!(e.trigger_effect(now), TriggerOutcome::Launched(25));
        assert_eq!(
            e.trigger_effect(now + Duration::from_millis(100)),
            TriggerOutcome::CoolingDown
        );
        assert_eq!(e.fireworks().len(), 25);

        e.set_mode(ViewMode::Scene);
        assert_eq!(
            e.trigger_effect(now + Duration::from_secs(5)),
            TriggerOutcome::SceneMode
        );
        assert_eq!(e.fireworks().len(), 25);
    }

    #[test]
    fn spotlight_follows_pointer_and_clock() {
        let mut e = engine();
        assert_eq!(e.pointer(), DVec2::new(-100.0, -100.0));
        e.pointer_moved(300.0, 200.0);
        let mut s = RecordingSurface::new();
        e.tick(&mut s, Instant::now());
        let spot = s
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Spotlight(sp) => Some(sp.clone()),
                _ => None,
            })
            .expect("spotlight painted");
        assert_eq!(spot.center, DVec2::new(300.0, 200.0));
        assert!((spot.radius - (45.0 + 5.0 * TIME_STEP.sin())).abs() < 1e-9);
    }

    #[test]
    fn scene_mode_draws_stars_not_fireworks() {
        let mut e = engine();
        let now = Instant::now();
        e.trigger_effect(now);
        e.set_mode(ViewMode::Scene);
        assert_eq!(e.stars().len(), 100);
        e.set_hover_intent(true, now);

        let mut s = RecordingSurface::new();
        e.tick(&mut s, now);
        // Fireworks are frozen while the star field runs.
        assert_eq!(e.fireworks().rockets(), 25);
        assert_eq!(s.discs(), 100);
        assert!(e.star_global_alpha() > 0.0);
    }

    #[test]
    fn shutdown_drops_effects_and_pending_release() {
        let mut e = engine();
        let now = Instant::now();
        e.pointer_moved(10.0, 10.0);
        e.pointer_moved(20.0, 20.0);
        e.trigger_effect(now);
        e.set_hover_intent(true, now);
        let pending = e.set_hover_intent(false, now).expect("release armed");

        e.shutdown();
        assert!(e.fireworks().is_empty());
        assert!(e.trail().is_empty());
        assert!(!e.expire_hover(pending.token));
        // The cooldown is reset along with everything else.
        assert_eq!(e.trigger_effect(now), TriggerOutcome::Launched(25));
    }
}
