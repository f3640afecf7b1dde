// File: crates/bench-graphs/src/report.rs
// Summary: Turns one loaded benchmark file into an annotated comparison chart on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Annotation, Axis, Chart, Series};
use tracing::{debug, info};

use crate::config::Config;
use crate::diff::{annotation_text, compare_to_baseline, Comparison};
use crate::loader::SeriesSet;

/// Samples recorded per series, one per tenth of a second.
pub const SAMPLE_COUNT: usize = 10;
pub const X_LABEL: &str = "time (seconds)";
pub const Y_LABEL: &str = "actions";
/// Figure fraction (from bottom-left) where the comparison block starts.
pub const ANNOTATION_POSITION: (f32, f32) = (0.173, 0.6);
pub const ANNOTATION_FONT_SIZE: f32 = 10.0;
/// Padding around the data on both axes, as a fraction of the span.
const AXIS_MARGIN: f64 = 0.05;

/// Elapsed time of each sample: 0.1, 0.2, ..., 1.0 seconds.
pub fn time_axis() -> Vec<f64> {
    (1..=SAMPLE_COUNT).map(|i| i as f64 / SAMPLE_COUNT as f64).collect()
}

/// File name without directory and last extension.
pub fn chart_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chart".to_string())
}

/// Chart with one labeled line per series against the time axis, plus the comparison block.
pub fn build_chart(title: &str, set: &SeriesSet, comparisons: &[Comparison]) -> Chart {
    let xs = time_axis();
    let mut chart = Chart::new();
    chart.title = Some(title.to_string());
    for (name, values) in set.iter() {
        debug!(series = name, samples = values.len(), "adding series");
        chart.add_series(Series::from_xy(&xs, values).labeled(name));
    }

    chart.x_axis = Axis::new(X_LABEL, xs[0], xs[SAMPLE_COUNT - 1]);
    chart.y_axis = Axis::new(Y_LABEL, 0.0, 1.0);
    // without data the axes keep the ranges above
    chart.autoscale_axes(AXIS_MARGIN);

    let (fx, fy) = ANNOTATION_POSITION;
    chart.add_annotation(Annotation::at_fraction(annotation_text(comparisons), fx, fy).with_size(ANNOTATION_FONT_SIZE));
    chart
}

/// Create `dir` if missing. Existing directories are fine.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create output directory {}", dir.display()))
}

/// Outcome of rendering one input file.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    pub source: PathBuf,
    pub title: String,
    pub output: PathBuf,
    pub comparisons: Vec<Comparison>,
}

impl RenderedChart {
    /// The comparison block as drawn on the chart.
    pub fn annotation(&self) -> String {
        annotation_text(&self.comparisons)
    }
}

/// Render `set` (loaded from `source`) into `<output_dir>/<title>.svg`.
/// Comparisons are computed before anything is written, so a failing file leaves no output.
pub fn plot_benchmark(set: &SeriesSet, source: &Path, config: &Config) -> Result<RenderedChart> {
    let title = chart_title(source);
    let comparisons = compare_to_baseline(set)
        .with_context(|| format!("cannot compare series of {}", source.display()))?;
    let chart = build_chart(&title, set, &comparisons);

    ensure_output_dir(&config.output_dir)?;
    let output = config.output_path(&title);
    chart
        .render_to_svg(&config.render, &output)
        .with_context(|| format!("cannot render chart {}", output.display()))?;
    info!(output = %output.display(), series = set.len(), "wrote chart");

    Ok(RenderedChart { source: source.to_path_buf(), title, output, comparisons })
}
