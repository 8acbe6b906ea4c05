//! Presentation and seeding parameters.
//!
//! Numerical tuning lives in [`crate::constants`]; this struct carries what a
//! host might reasonably want to restyle.

use crate::constants::TRAIL_LINE_WIDTH;
use std::fmt;

/// An opaque 8-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const IVORY: Rgb = Rgb(230, 220, 207);
    pub const STARLIGHT: Rgb = Rgb(255, 250, 235);

    /// CSS `rgba()` string with the given alpha.
    pub fn css_rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

#[derive(Clone, Debug)]
pub struct AmbientParams {
    pub trail_color: Rgb,
    pub trail_line_width: f64,
    pub spotlight_color: Rgb,
    pub rocket_color: Rgb,
    pub spark_color: Rgb,
    pub star_color: Rgb,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            trail_color: Rgb::IVORY,
            trail_line_width: TRAIL_LINE_WIDTH,
            spotlight_color: Rgb::IVORY,
            rocket_color: Rgb::WHITE,
            spark_color: Rgb::WHITE,
            star_color: Rgb::STARLIGHT,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        assert_eq!(Rgb::IVORY.to_string(), "rgb(230, 220, 207)");
        assert_eq!(Rgb::WHITE.css_rgba(0.5), "rgba(255, 255, 255, 0.5)");
    }
}
