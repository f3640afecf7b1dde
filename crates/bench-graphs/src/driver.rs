// File: crates/bench-graphs/src/driver.rs
// Summary: Finds benchmark result files and charts each one in turn.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::loader::load_benchmark_file;
use crate::report::{ensure_output_dir, plot_benchmark, RenderedChart};

/// Regular files in the input directory matching the configured pattern, sorted by path.
pub fn discover_inputs(config: &Config) -> Result<Vec<PathBuf>> {
    let pattern = config.input_glob();
    // hidden files need an explicit leading dot in the pattern
    let options = glob::MatchOptions { require_literal_leading_dot: true, ..glob::MatchOptions::new() };
    let mut files = glob::glob_with(&pattern, options)
        .with_context(|| format!("invalid input pattern `{pattern}`"))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("cannot list {}", config.input_dir.display()))?;
    files.retain(|p| p.is_file());
    files.sort();
    Ok(files)
}

/// Chart every input file, one after another. The first failure stops the run;
/// charts already written stay on disk.
pub fn run(config: &Config) -> Result<Vec<RenderedChart>> {
    ensure_output_dir(&config.output_dir)?;
    let inputs = discover_inputs(config)?;
    info!(count = inputs.len(), input = %config.input_dir.display(), "found benchmark results");

    let mut rendered = Vec::with_capacity(inputs.len());
    for path in inputs {
        println!("Plotting {}", path.display());
        let set = load_benchmark_file(&path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        let chart = plot_benchmark(&set, &path, config)
            .with_context(|| format!("failed to plot {}", path.display()))?;
        rendered.push(chart);
    }
    Ok(rendered)
}
