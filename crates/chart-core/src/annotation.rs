// File: crates/chart-core/src/annotation.rs
// Summary: Free-floating text blocks positioned in figure coordinates.

/// Multi-line text anchored at a fraction of the figure, measured from the
/// bottom-left corner. `(0.0, 0.0)` is bottom-left, `(1.0, 1.0)` top-right.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub fx: f32,
    pub fy: f32,
    /// Font size in points at the 480px reference height.
    pub size: f32,
}

impl Annotation {
    pub fn at_fraction(text: impl Into<String>, fx: f32, fy: f32) -> Self {
        Self { text: text.into(), fx, fy, size: 10.0 }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Pixel position of the block's first baseline on a `width` x `height` surface.
    pub fn origin_px(&self, width: i32, height: i32) -> (f32, f32) {
        (self.fx * width as f32, (1.0 - self.fy) * height as f32)
    }

    /// Non-empty lines, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().filter(|l| !l.trim().is_empty())
    }
}
