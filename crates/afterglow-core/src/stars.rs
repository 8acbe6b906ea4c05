//! Twinkling star field with a hover-driven crossfade.

use crate::config::Rgb;
use crate::constants::*;
use crate::particle::{Particle, ParticleKind};
use crate::surface::{Surface, Viewport};
use glam::DVec2;
use rand::Rng;

#[derive(Debug, Default)]
pub struct StarField {
    stars: Vec<Particle>,
    global_alpha: f64,
    seeded_for: Option<Viewport>,
}

impl StarField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set with [`STAR_COUNT`] fresh stars in the upper half
    /// of the viewport. An unready viewport leaves the field empty.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, color: Rgb) {
        self.stars.clear();
        self.seeded_for = Some(viewport);
        if !viewport.is_ready() {
            log::debug!("[stars] viewport not ready, field left empty");
            return;
        }
        let horizon = viewport.height / 2.0;
        self.stars.extend((0..STAR_COUNT).map(|_| {
            let pos = DVec2::new(
                rng.gen::<f64>() * viewport.width,
                rng.gen::<f64>() * horizon,
            );
            Particle::star(
                pos,
                rng.gen::<f64>(),
                rng.gen_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
                rng.gen_range(STAR_TWINKLE_MIN..STAR_TWINKLE_MAX),
                color,
            )
        }));
        log::debug!(
            "[stars] seeded {} stars for {}x{}",
            self.stars.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Twinkle every star and ease the crossfade toward the hover target.
    pub fn update(&mut self, time: f64, hover_active: bool) {
        for star in self.stars.iter_mut() {
            if let ParticleKind::Star { twinkle_speed } = star.kind {
                let wobble = twinkle_speed * (STAR_TWINKLE_RATE * time + star.pos.x).sin();
                let next = (star.alpha + wobble).clamp(STAR_ALPHA_MIN, STAR_ALPHA_MAX);
                if next.is_finite() {
                    star.alpha = next;
                }
            }
        }
        let target = if hover_active { 1.0 } else { 0.0 };
        self.global_alpha =
            (self.global_alpha + (target - self.global_alpha) * STAR_FADE_RATE).clamp(0.0, 1.0);
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        if !self.is_visible() {
            return;
        }
        for star in &self.stars {
            let alpha = star.alpha * self.global_alpha;
            if let Err(e) = surface.fill_disc(star.pos, star.size, star.color, alpha) {
                log::debug!("[stars] star skipped: {e}");
            }
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.global_alpha > STAR_VISIBLE_EPSILON
    }

    pub fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    pub fn stars(&self) -> &[Particle] {
        &self.stars
    }

    /// Viewport of the last seeding, `None` before the first one.
    pub fn seeded_for(&self) -> Option<Viewport> {
        self.seeded_for
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(w: f64, h: f64) -> StarField {
        let mut field = StarField::new();
        field.seed(&mut StdRng::seed_from_u64(3), Viewport::new(w, h), Rgb::STARLIGHT);
        field
    }

    #[test]
    fn seeds_upper_half() {
        let field = seeded(800.0, 600.0);
        assert_eq!(field.len(), 100);
        for s in field.stars() {
            assert!(s.pos.y >= 0.0 && s.pos.y <= 300.0);
            assert!(s.pos.x >= 0.0 && s.pos.x <= 800.0);
            assert!(s.size >= 0.5 && s.size < 2.5);
            match s.kind {
                ParticleKind::Star { twinkle_speed } => {
                    assert!((0.005..0.025).contains(&twinkle_speed))
                }
                other => panic!("unexpected kind {other:?}"),
            }
        }
    }

    #[test]
    fn reseed_replaces_everything() {
        let mut field = seeded(800.0, 600.0);
        field.seed(&mut StdRng::seed_from_u64(9), Viewport::new(400.0, 200.0), Rgb::STARLIGHT);
        assert_eq!(field.len(), 100);
        assert!(field.stars().iter().all(|s| s.pos.y <= 100.0 && s.pos.x <= 400.0));
        assert_eq!(field.seeded_for(), Some(Viewport::new(400.0, 200.0)));
    }

    #[test]
    fn unready_viewport_leaves_field_empty() {
        let field = seeded(0.0, 0.0);
        assert!(field.is_empty());
    }

    #[test]
    fn twinkle_stays_clamped() {
        let mut field = seeded(800.0, 600.0);
        let mut t = 0.0;
        for _ in 0..300 {
            t += TIME_STEP;
            field.update(t, true);
            assert!(field.stars().iter().all(|s| (0.2..=1.0).contains(&s.alpha)));
        }
    }

    #[test]
    fn crossfade_is_first_order_lag() {
        let mut field = seeded(800.0, 600.0);
        let mut prev = field.global_alpha();
        for _ in 0..200 {
            field.update(0.0, true);
            let a = field.global_alpha();
            assert!(a > prev && a <= 1.0);
            assert!((a - (prev + (1.0 - prev) * 0.05)).abs() < 1e-12);
            prev = a;
        }
        for _ in 0..200 {
            field.update(0.0, false);
            let a = field.global_alpha();
            assert!(a < prev && a >= 0.0);
            assert!((prev - a) <= 0.05 + 1e-12);
            prev = a;
        }
    }

    #[test]
    fn hidden_until_crossfade_passes_epsilon() {
        let mut field = seeded(800.0, 600.0);
        let mut surface = RecordingSurface::new();
        field.draw(&mut surface);
        assert_eq!(surface.discs(), 0);

        field.update(0.0, true);
        assert!(field.global_alpha() > 0.01);
        field.draw(&mut surface);
        assert_eq!(surface.discs(), 100);
    }
}
