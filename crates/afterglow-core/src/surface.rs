//! The drawing seam between the simulation and whatever paints it.
//!
//! Components describe what to draw through [`Surface`]; the web crate backs it
//! with a Canvas 2D context and the overlay element, while tests and the
//! native runner use [`RecordingSurface`].

use crate::config::Rgb;
use crate::error::AmbientError;
use crate::spotlight::Spotlight;
use glam::DVec2;

/// Size of the drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A zero-area viewport means the host has not laid out the canvas yet.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

pub trait Surface {
    fn clear(&mut self) -> Result<(), AmbientError>;

    fn stroke_segment(
        &mut self,
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgb,
        alpha: f64,
    ) -> Result<(), AmbientError>;

    fn fill_disc(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
    ) -> Result<(), AmbientError>;

    fn paint_spotlight(&mut self, spotlight: &Spotlight) -> Result<(), AmbientError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Segment {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgb,
        alpha: f64,
    },
    Disc {
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
    },
    Spotlight(Spotlight),
}

/// Captures draw calls as data.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the most recent clear, i.e. the last complete frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn discs(&self) -> usize {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
            .count()
    }

    pub fn segments(&self) -> usize {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Segment { .. }))
            .count()
    }

    /// Keeps only the last frame so long runs stay bounded.
    pub fn reset_keep_last(&mut self) {
        let keep = self.last_frame().to_vec();
        self.commands = keep;
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<(), AmbientError> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn stroke_segment(
        &mut self,
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgb,
        alpha: f64,
    ) -> Result<(), AmbientError> {
        self.commands.push(DrawCommand::Segment {
            from,
            to,
            width,
            color,
            alpha,
        });
        Ok(())
    }

    fn fill_disc(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
    ) -> Result<(), AmbientError> {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
            alpha,
        });
        Ok(())
    }

    fn paint_spotlight(&mut self, spotlight: &Spotlight) -> Result<(), AmbientError> {
        self.commands.push(DrawCommand::Spotlight(spotlight.clone()));
        Ok(())
    }
}
