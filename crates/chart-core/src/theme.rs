// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub annotation: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Line colors, cycled by series index.
    pub palette: [skia::Color; 8],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0x0c, 0x13, 0x1a),
            grid: skia::Color::from_argb(255, 0x24, 0x2e, 0x38),
            axis_line: skia::Color::from_argb(255, 0x5c, 0x67, 0x72),
            axis_label: skia::Color::from_argb(255, 0xd0, 0xd6, 0xdc),
            tick: skia::Color::from_argb(255, 0x99, 0xa3, 0xad),
            title: skia::Color::from_argb(255, 0xee, 0xf0, 0xf2),
            annotation: skia::Color::from_argb(255, 0xd0, 0xd6, 0xdc),
            legend_background: skia::Color::from_argb(200, 0x16, 0x1f, 0x29),
            legend_border: skia::Color::from_argb(255, 0x3a, 0x45, 0x50),
            palette: [
                skia::Color::from_argb(255, 0x0c, 0xc4, 0xff), // cyan
                skia::Color::from_argb(255, 0xff, 0x6a, 0x8b), // pink
                skia::Color::from_argb(255, 0x9e, 0xe6, 0x5c), // lime
                skia::Color::from_argb(255, 0xff, 0xc1, 0x4d), // amber
                skia::Color::from_argb(255, 0xb0, 0x8c, 0xff), // violet
                skia::Color::from_argb(255, 0x4d, 0xe0, 0xc2), // teal
                skia::Color::from_argb(255, 0xff, 0x94, 0x4d), // orange
                skia::Color::from_argb(255, 0xe6, 0xe6, 0xe6), // light grey
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 10, 10, 20),
            annotation: skia::Color::from_argb(255, 20, 20, 30),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 205),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
                skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
                skia::Color::from_argb(255, 0xe3, 0x77, 0xc2),
                skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f),
            ],
        }
    }

    /// Palette color for the `index`-th series, wrapping around.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}
