// File: crates/bench-graphs/src/lib.rs
// Summary: Benchmark result loading, baseline comparison, and chart generation.

pub mod config;
pub mod diff;
pub mod driver;
pub mod error;
pub mod loader;
pub mod report;

pub use config::Config;
pub use diff::{compare_to_baseline, difference_average, percentage_difference, Comparison};
pub use driver::{discover_inputs, run};
pub use error::{DiffError, LoadError};
pub use loader::{load_benchmark_file, parse_benchmark_data, SeriesSet};
pub use report::{plot_benchmark, RenderedChart};
