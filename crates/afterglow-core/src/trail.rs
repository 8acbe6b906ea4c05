//! Fading polyline that follows the pointer.

use crate::config::Rgb;
use crate::constants::TRAIL_AGE_STEP;
use crate::surface::Surface;
use glam::DVec2;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: DVec2,
    pub age: f64,
}

#[derive(Debug, Default)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: DVec2) {
        self.points.push_back(TrailPoint { pos, age: 1.0 });
    }

    /// Ages every point by one tick and drops the ones that ran out.
    pub fn update(&mut self) {
        for p in self.points.iter_mut() {
            p.age -= TRAIL_AGE_STEP;
        }
        self.points.retain(|p| p.age > 0.0 && p.pos.is_finite());
    }

    /// Strokes one segment per consecutive pair; a segment takes the older
    /// point's age as its alpha.
    pub fn draw(&self, surface: &mut impl Surface, width: f64, color: Rgb) {
        for (a, b) in self.points.iter().zip(self.points.iter().skip(1)) {
            if let Err(e) = surface.stroke_segment(a.pos, b.pos, width, color, a.age) {
                log::debug!("[trail] segment skipped: {e}");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
