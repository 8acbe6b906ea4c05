use glam::DVec2;

// ---------------- Pointer helpers ----------------

/// Client (viewport) coordinates to canvas-local CSS pixels.
///
/// Nothing is clamped: samples outside the canvas stay outside.
#[inline]
pub fn client_to_canvas(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> DVec2 {
    DVec2::new(client_x - rect_left, client_y - rect_top)
}

// ---------------- Sizing helpers ----------------

/// Backing-store size for a canvas laid out at `css_w` x `css_h`.
///
/// Fractional sizes truncate; NaN and negatives fall back to `min_px`.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, min_px: u32) -> (u32, u32) {
    let px = |v: f64| {
        if v.is_finite() && v > 0.0 {
            (v as u32).max(min_px)
        } else {
            min_px
        }
    };
    (px(css_w), px(css_h))
}
