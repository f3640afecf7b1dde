// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, paddings, plot area).

use crate::geometry::RectI32;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Surface height that text sizes are authored against; sizes scale with the real height.
pub const REFERENCE_HEIGHT: f32 = 480.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Plot area left inside a `width` x `height` surface.
    /// Collapses to a zero-sized rect instead of inverting when the insets exceed the surface.
    pub fn plot_rect(&self, width: i32, height: i32) -> RectI32 {
        let left = self.left as i32;
        let top = self.top as i32;
        let right = (width - self.right as i32).max(left);
        let bottom = (height - self.bottom as i32).max(top);
        RectI32::from_ltrb(left, top, right, bottom)
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for title on top, tick + axis labels on the left/bottom
        Self::new(88, 32, 56, 72)
    }
}

/// Scale a font size authored for a 480px tall figure to a surface of `height` pixels.
pub fn scaled_font_size(size: f32, height: i32) -> f32 {
    (size * height as f32 / REFERENCE_HEIGHT).max(1.0)
}
