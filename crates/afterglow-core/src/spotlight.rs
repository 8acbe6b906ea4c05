use crate::config::Rgb;
use crate::constants::*;
use glam::DVec2;

/// A breathing radial highlight centred on the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Spotlight {
    pub center: DVec2,
    pub radius: f64,
    pub opacity: f64,
    pub color: Rgb,
}

impl Spotlight {
    /// Radius and opacity both breathe with `sin(time)`.
    pub fn at(pointer: DVec2, time: f64, color: Rgb) -> Self {
        let wave = time.sin();
        Self {
            center: pointer,
            radius: SPOTLIGHT_RADIUS_BASE + SPOTLIGHT_RADIUS_SWING * wave,
            opacity: SPOTLIGHT_OPACITY_BASE + SPOTLIGHT_OPACITY_SWING * wave,
            color,
        }
    }

    pub fn css_background(&self) -> String {
        format!(
            "radial-gradient({}px circle at {}px {}px, {}, transparent 100%)",
            self.radius,
            self.center.x,
            self.center.y,
            self.color.css_rgba(self.opacity)
        )
    }
}
