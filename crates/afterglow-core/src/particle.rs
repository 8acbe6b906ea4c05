use crate::config::Rgb;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    /// Ascends until its apex, then bursts into sparks.
    Rocket,
    /// Debris from a burst; fades out under drag.
    Spark,
    /// Background star; never expires on its own.
    Star { twinkle_speed: f64 },
}

/// One drawable point with physics state. Behaviour is chosen by `kind`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub alpha: f64,
    pub size: f64,
    pub color: Rgb,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn rocket(pos: DVec2, vel: DVec2, size: f64, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            alpha: 1.0,
            size,
            color,
            kind: ParticleKind::Rocket,
        }
    }

    pub fn spark(pos: DVec2, vel: DVec2, size: f64, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            alpha: 1.0,
            size,
            color,
            kind: ParticleKind::Spark,
        }
    }

    pub fn star(pos: DVec2, alpha: f64, size: f64, twinkle_speed: f64, color: Rgb) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            alpha: alpha.clamp(0.0, 1.0),
            size,
            color,
            kind: ParticleKind::Star { twinkle_speed },
        }
    }

    #[inline]
    pub fn is_rocket(&self) -> bool {
        matches!(self.kind, ParticleKind::Rocket)
    }

    #[inline]
    pub fn is_spark(&self) -> bool {
        matches!(self.kind, ParticleKind::Spark)
    }

    /// False if any numeric field has gone NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.alpha.is_finite() && self.size.is_finite()
    }
}
