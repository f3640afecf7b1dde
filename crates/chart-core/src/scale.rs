// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps the data interval `[vmin, vmax]` onto the pixel interval `[px_start, px_end]`.
/// `px_end` may be smaller than `px_start` (Y axes grow upwards).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, mut vmax: f64, px_start: f32, px_end: f32) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { vmin, vmax, px_start, px_end }
    }

    /// Left-to-right mapping of `axis` across `rect`.
    pub fn horizontal(axis: &Axis, rect: &RectI32) -> Self {
        Self::new(axis.min, axis.max, rect.left as f32, rect.right as f32)
    }

    /// Bottom-to-top mapping of `axis` across `rect`.
    pub fn vertical(axis: &Axis, rect: &RectI32) -> Self {
        Self::new(axis.min, axis.max, rect.bottom as f32, rect.top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}
