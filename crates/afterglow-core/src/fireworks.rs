//! Rocket and spark lifecycle.
//!
//! A burst launches [`ROCKETS_PER_BURST`] rockets from the bottom edge. Each
//! rocket climbs under gravity and, on the first tick its vertical velocity
//! reaches [`ROCKET_APEX_VY`], is replaced by a ring of sparks that slow down
//! under drag and fade out. All steps are per tick, not per second.

use crate::config::Rgb;
use crate::constants::*;
use crate::particle::{Particle, ParticleKind};
use crate::surface::{Surface, Viewport};
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::TAU;

type SparkBatch = SmallVec<[Particle; 64]>;

#[derive(Debug, Default)]
pub struct Fireworks {
    particles: Vec<Particle>,
}

impl Fireworks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch a full burst of rockets. Returns how many were added.
    pub fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, color: Rgb) -> usize {
        let band_start = viewport.width * (1.0 - ROCKET_LAUNCH_BAND) / 2.0;
        let band = viewport.width * ROCKET_LAUNCH_BAND;
        self.particles.reserve(ROCKETS_PER_BURST);
        for _ in 0..ROCKETS_PER_BURST {
            let x = band_start + rng.gen::<f64>() * band;
            let vx = rng.gen_range(-ROCKET_VX_SPREAD..ROCKET_VX_SPREAD);
            let vy = -(ROCKET_VY_BASE + rng.gen::<f64>() * ROCKET_VY_EXTRA);
            let size = rng.gen_range(ROCKET_SIZE_MIN..ROCKET_SIZE_MAX);
            self.particles.push(Particle::rocket(
                DVec2::new(x, viewport.height),
                DVec2::new(vx, vy),
                size,
                color,
            ));
        }
        ROCKETS_PER_BURST
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advance every particle by one tick.
    ///
    /// Sparks born this tick are not stepped until the next one. Particles
    /// whose state went non-finite are dropped without touching the others.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, spark_color: Rgb) {
        let mut born = SparkBatch::new();
        let mut dropped = 0usize;
        self.particles.retain_mut(|p| {
            let keep = match p.kind {
                ParticleKind::Rocket => {
                    step_rocket(p);
                    if p.vel.y >= ROCKET_APEX_VY {
                        explode(&mut *rng, p.pos, spark_color, &mut born);
                        false
                    } else {
                        true
                    }
                }
                ParticleKind::Spark => {
                    step_spark(p);
                    p.alpha > 0.0
                }
                // Stars belong to the star field.
                ParticleKind::Star { .. } => false,
            };
            if keep && !p.is_finite() {
                dropped += 1;
                return false;
            }
            keep
        });
        if dropped > 0 {
            log::warn!("[fx] dropped {dropped} malformed particle(s)");
        }
        if !born.is_empty() {
            log::trace!("[fx] {} sparks born", born.len());
            self.particles.extend(born);
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        for p in &self.particles {
            if let Err(e) = surface.fill_disc(p.pos, p.size, p.color, p.alpha) {
                log::debug!("[fx] particle skipped: {e}");
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn rockets(&self) -> usize {
        self.particles.iter().filter(|p| p.is_rocket()).count()
    }

    pub fn sparks(&self) -> usize {
        self.particles.iter().filter(|p| p.is_spark()).count()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[inline]
fn step_rocket(p: &mut Particle) {
    p.pos += p.vel;
    p.vel.y += ROCKET_GRAVITY;
    p.alpha = (p.alpha - ROCKET_FADE).clamp(0.0, 1.0);
}

#[inline]
fn step_spark(p: &mut Particle) {
    p.pos += p.vel;
    p.vel.y += SPARK_GRAVITY;
    p.vel *= SPARK_DRAG;
    p.alpha = (p.alpha - SPARK_FADE).clamp(0.0, 1.0);
}

/// Append one explosion's sparks to `out`. Returns how many were added.
fn explode<R: Rng + ?Sized>(rng: &mut R, at: DVec2, color: Rgb, out: &mut SparkBatch) -> usize {
    let count = rng.gen_range(SPARKS_MIN..=SPARKS_MAX);
    out.extend((0..count).map(|_| {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(SPARK_SPEED_MIN..SPARK_SPEED_MAX);
        let size = rng.gen_range(SPARK_SIZE_MIN..SPARK_SIZE_MAX);
        Particle::spark(at, DVec2::from_angle(angle) * speed, size, color)
    }));
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn launch_respects_band_and_velocity() {
        let mut fw = Fireworks::new();
        let vp = Viewport::new(1000.0, 700.0);
        let n = fw.launch(&mut rng(), vp, Rgb::WHITE);
        assert_eq!(n, 25);
        assert_eq!(fw.rockets(), 25);
        for p in fw.particles() {
            assert!(p.pos.x >= 150.0 && p.pos.x <= 850.0, "x={}", p.pos.x);
            assert_eq!(p.pos.y, 700.0);
            assert!(p.vel.y >= -9.0 && p.vel.y <= -4.0, "vy={}", p.vel.y);
            assert!(p.vel.x > -1.5 && p.vel.x < 1.5);
            assert_eq!(p.alpha, 1.0);
            assert!(p.size >= 1.5 && p.size < 3.5);
        }
    }

    #[test]
    fn rocket_explodes_once_at_apex() {
        let mut rng = rng();
        let mut fw = Fireworks::new();
        fw.push(Particle::rocket(
            DVec2::new(100.0, 500.0),
            DVec2::new(0.0, -6.0),
            2.0,
            Rgb::WHITE,
        ));
        let mut ticks = 0;
        while fw.rockets() == 1 {
            let vy_before = fw.particles()[0].vel.y;
            fw.update(&mut rng, Rgb::WHITE);
            ticks += 1;
            if fw.rockets() == 1 {
                assert!(fw.particles()[0].vel.y < ROCKET_APEX_VY);
                assert_eq!(fw.sparks(), 0);
            } else {
                assert!(vy_before + ROCKET_GRAVITY >= ROCKET_APEX_VY);
            }
            assert!(ticks < 100);
        }
        let sparks = fw.sparks();
        assert!((30..=49).contains(&sparks), "sparks={sparks}");
        fw.update(&mut rng, Rgb::WHITE);
        assert_eq!(fw.rockets(), 0);
        assert!(fw.sparks() <= sparks);
    }

    #[test]
    fn sparks_leave_from_apex_within_speed_range() {
        let mut rng = rng();
        let mut batch = SparkBatch::new();
        let n = explode(&mut rng, DVec2::new(3.0, 4.0), Rgb::WHITE, &mut batch);
        assert!((30..=49).contains(&n));
        assert_eq!(batch.len(), n);
        // A second explosion appends rather than replaces.
        let m = explode(&mut rng, DVec2::ZERO, Rgb::WHITE, &mut batch);
        assert_eq!(batch.len(), n + m);
        batch.truncate(n);
        for s in &batch {
            assert_eq!(s.pos, DVec2::new(3.0, 4.0));
            let speed = s.vel.length();
            assert!(speed >= 0.5 - 1e-9 && speed < 3.5 + 1e-9);
            assert!(s.size >= 0.5 && s.size < 2.0);
        }
    }

    #[test]
    fn spark_step_applies_gravity_then_drag() {
        let mut p = Particle::spark(DVec2::ZERO, DVec2::new(2.0, -1.0), 1.0, Rgb::WHITE);
        for _ in 0..60 {
            let before = p.clone();
            step_spark(&mut p);
            assert_eq!(p.pos, before.pos + before.vel);
            // Undoing the drag and the gravity kick recovers the old velocity.
            let undone = p.vel / SPARK_DRAG - DVec2::new(0.0, SPARK_GRAVITY);
            assert!((undone - before.vel).length() < 1e-9);
            // With gravity's contribution removed, speed shrinks by the drag factor.
            let without_gravity = p.vel - DVec2::new(0.0, SPARK_GRAVITY * SPARK_DRAG);
            assert!(
                (without_gravity.length() - before.vel.length() * SPARK_DRAG).abs() < 1e-9
            );
            assert!(without_gravity.length() <= before.vel.length());
        }
    }

    #[test]
    fn sparks_fade_out_and_are_removed() {
        let mut fw = Fireworks::new();
        fw.push(Particle::spark(DVec2::ZERO, DVec2::X, 1.0, Rgb::WHITE));
        let mut ticks = 0;
        while !fw.is_empty() {
            fw.update(&mut rng(), Rgb::WHITE);
            for p in fw.particles() {
                assert!(p.alpha > 0.0 && p.alpha <= 1.0);
            }
            ticks += 1;
            assert!(ticks <= 70);
        }
        // 1 / 0.015 rounds up to 67 ticks.
        assert!((66..=68).contains(&ticks), "ticks={ticks}");
    }

    #[test]
    fn malformed_particle_does_not_block_others() {
        let mut fw = Fireworks::new();
        fw.push(Particle::spark(DVec2::new(f64::NAN, 0.0), DVec2::X, 1.0, Rgb::WHITE));
        fw.push(Particle::spark(DVec2::ZERO, DVec2::X, 1.0, Rgb::WHITE));
        fw.update(&mut rng(), Rgb::WHITE);
        assert_eq!(fw.len(), 1);
        assert_eq!(fw.particles()[0].pos, DVec2::X);
    }
}
