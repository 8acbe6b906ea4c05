use afterglow_core::{AmbientError, Rgb, Spotlight, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas 2D context for the trail and particles, plus the overlay element
/// whose background carries the spotlight gradient.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    spotlight: Option<web::HtmlElement>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, spotlight: Option<web::HtmlElement>) -> Self {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
        Self {
            canvas,
            ctx,
            spotlight,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ctx.is_some()
    }

    fn ctx(&self) -> Result<&web::CanvasRenderingContext2d, AmbientError> {
        self.ctx.as_ref().ok_or(AmbientError::SurfaceUnavailable)
    }
}

#[inline]
fn js_err(e: JsValue) -> AmbientError {
    AmbientError::Draw(format!("{:?}", e))
}

impl Surface for CanvasSurface {
    fn clear(&mut self) -> Result<(), AmbientError> {
        let ctx = self.ctx()?;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
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
        let ctx = self.ctx()?;
        // Canvas resizes reset context state.
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.set_line_width(width);
        ctx.set_stroke_style_str(&color.css_rgba(alpha));
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
        Ok(())
    }

    fn fill_disc(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
    ) -> Result<(), AmbientError> {
        let ctx = self.ctx()?;
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_str(&color.to_string());
        ctx.begin_path();
        let drawn = ctx.arc(center.x, center.y, radius, 0.0, TAU).map_err(js_err);
        if drawn.is_ok() {
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        drawn
    }

    fn paint_spotlight(&mut self, spotlight: &Spotlight) -> Result<(), AmbientError> {
        // Pages without an overlay element simply have no spotlight.
        let Some(el) = &self.spotlight else {
            return Ok(());
        };
        el.style()
            .set_property("background", &spotlight.css_background())
            .map_err(js_err)
    }
}
