// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless SVG rendering pipeline using Skia's SVG canvas.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::annotation::Annotation;
use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{scaled_font_size, Insets, HEIGHT, WIDTH};
use crate::Axis;

/// Approximate number of ticks per axis.
const TICK_TARGET: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw all text (title, axis and tick labels, legend entries, annotations).
    pub draw_labels: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            draw_legend: true,
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub annotations: Vec<Annotation>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            annotations: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// `(x_min, x_max, y_min, y_max)` across all series, `None` when no series has finite data.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|(a0, a1, a2, a3), (b0, b1, b2, b3)| (a0.min(b0), a1.max(b1), a2.min(b2), a3.max(b3)))
    }

    /// Fit both axes to the data, padding each side by `margin_frac` of the span.
    /// Leaves the axes untouched when there is nothing to fit.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let Some((mut x_min, mut x_max, mut y_min, mut y_max)) = self.data_bounds() else {
            return;
        };
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let xm = (x_max - x_min) * margin_frac;
        let ym = (y_max - y_min) * margin_frac;
        x_min -= xm;
        x_max += xm;
        y_min -= ym;
        y_max += ym;
        self.x_axis.set_range(x_min, x_max);
        self.y_axis.set_range(y_min, y_max);
    }

    /// Render the chart into an in-memory SVG document.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        // Finishing the document consumes the canvas; nothing outlives this call.
        let data = canvas.end();
        if data.is_empty() {
            return Err(ChartError::EmptyDocument);
        }
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to an SVG file at `output_svg_path`, creating parent directories.
    /// An existing file is overwritten.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let path = output_svg_path.as_ref();
        let bytes = self.render_to_svg_bytes(opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ChartError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, &bytes).map_err(|source| ChartError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote svg");
        Ok(())
    }

    /// Draw the full chart onto any Skia canvas.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = opts.insets.plot_rect(opts.width, opts.height);
        let sx = LinearScale::horizontal(&self.x_axis, &plot);
        let sy = LinearScale::vertical(&self.y_axis, &plot);
        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);
        draw_axes(canvas, &plot, theme);

        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &plot, &sx, &sy, s, theme.series_color(i));
        }

        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &plot, &self.x_axis, &self.y_axis, &sx, &sy, opts);
            draw_axis_labels(canvas, shaper, &plot, &self.x_axis, &self.y_axis, opts);
            if let Some(title) = &self.title {
                let size = scaled_font_size(12.0, opts.height);
                let baseline = (plot.top as f32 - size * 0.8).max(size);
                shaper.draw_centered(canvas, title, plot.center_x(), baseline, size, theme.title);
            }
        }

        if opts.draw_legend {
            draw_legend(canvas, shaper.as_ref(), &plot, &self.series, opts);
        }

        if let Some(shaper) = &shaper {
            for a in &self.annotations {
                draw_annotation(canvas, shaper, a, opts);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for v in nice_ticks(x.min, x.max, TICK_TARGET) {
        let px = sx.to_px(v);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for v in nice_ticks(y.min, y.max, TICK_TARGET) {
        let py = sy.to_px(v);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_rect(plot.to_skia(), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    opts: &RenderOptions,
) {
    let size = scaled_font_size(8.0, opts.height);
    let color = opts.theme.tick;

    let x_step = nice_step(x.span(), TICK_TARGET);
    for v in nice_ticks(x.min, x.max, TICK_TARGET) {
        let label = format_tick(v, x_step);
        shaper.draw_centered(canvas, &label, sx.to_px(v), plot.bottom as f32 + size * 1.4, size, color);
    }

    let y_step = nice_step(y.span(), TICK_TARGET);
    for v in nice_ticks(y.min, y.max, TICK_TARGET) {
        let label = format_tick(v, y_step);
        shaper.draw_right(canvas, &label, plot.left as f32 - 6.0, sy.to_px(v) + size * 0.35, size, color, true);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    opts: &RenderOptions,
) {
    let size = scaled_font_size(10.0, opts.height);
    let color = opts.theme.axis_label;

    if !x.label.is_empty() {
        shaper.draw_centered(canvas, &x.label, plot.center_x(), plot.bottom as f32 + size * 2.8, size, color);
    }
    if !y.label.is_empty() {
        let cx = (plot.left as f32 - size * 3.6).max(size);
        shaper.draw_vertical(canvas, &y.label, cx, plot.center_y(), size, color);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    color: skia::Color,
) {
    let mut points = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (sx.to_px(x), sy.to_px(y)));
    let Some(first) = points.next() else { return; };

    let mut path = skia::Path::new();
    path.move_to(first);
    let mut segments = 0usize;
    for p in points {
        path.line_to(p);
        segments += 1;
    }
    if segments == 0 {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    canvas.save();
    canvas.clip_rect(plot.to_skia(), None, None);
    canvas.draw_path(&path, &stroke);
    canvas.restore();
}

/// Legend box in the upper-right corner of the plot: one swatch per labeled series.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    plot: &RectI32,
    series: &[Series],
    opts: &RenderOptions,
) {
    let entries: Vec<(&str, skia::Color)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.label.as_deref().map(|l| (l, opts.theme.series_color(i))))
        .collect();
    if entries.is_empty() {
        return;
    }

    let size = scaled_font_size(9.0, opts.height);
    let row_h = size * 1.5;
    let swatch_w = size * 2.0;
    let pad = size * 0.6;
    let text_w = match shaper {
        Some(sh) => entries
            .iter()
            .map(|(label, _)| sh.measure_width(label, size, false))
            .fold(0.0f32, f32::max),
        None => 0.0,
    };

    let box_w = pad * 3.0 + swatch_w + text_w;
    let box_h = pad * 2.0 + row_h * entries.len() as f32;
    let right = plot.right as f32 - pad;
    let top = plot.top as f32 + pad;
    let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(opts.theme.legend_background);
    canvas.draw_rect(rect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(opts.theme.legend_border);
    canvas.draw_rect(rect, &border);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);
    swatch.set_stroke_width(2.0);

    for (row, (label, color)) in entries.iter().enumerate() {
        let mid = rect.top + pad + row_h * (row as f32 + 0.5);
        let x0 = rect.left + pad;
        swatch.set_color(*color);
        canvas.draw_line((x0, mid), (x0 + swatch_w, mid), &swatch);
        if let Some(sh) = shaper {
            sh.draw_left(canvas, label, x0 + swatch_w + pad, mid + size * 0.35, size, opts.theme.axis_label, false);
        }
    }
}

fn draw_annotation(canvas: &skia::Canvas, shaper: &TextShaper, a: &Annotation, opts: &RenderOptions) {
    let size = scaled_font_size(a.size, opts.height);
    let (x, y) = a.origin_px(opts.width, opts.height);
    for (i, line) in a.lines().enumerate() {
        shaper.draw_left(canvas, line, x, y + size * 1.4 * i as f32, size, opts.theme.annotation, false);
    }
}
