// File: crates/bench-graphs/src/config.rs
// Summary: Fixed input/output locations and render settings.

use std::path::PathBuf;

use chart_core::RenderOptions;

/// Directory the benchmark runs write their result files into.
pub const BENCHMARK_RESULTS_DIR: &str = "benchmark_results";
/// Directory the generated charts are written to.
pub const BENCHMARK_RESULT_GRAPHS_DIR: &str = "benchmark_result_graphs";
/// Any file with an extension.
pub const INPUT_PATTERN: &str = "*.*";
/// Extension of generated charts.
pub const OUTPUT_EXTENSION: &str = "svg";

#[derive(Clone, Debug)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub pattern: String,
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(BENCHMARK_RESULTS_DIR),
            output_dir: PathBuf::from(BENCHMARK_RESULT_GRAPHS_DIR),
            pattern: INPUT_PATTERN.to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Read from `input_dir`, write to `output_dir`, everything else default.
    pub fn with_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self { input_dir: input_dir.into(), output_dir: output_dir.into(), ..Self::default() }
    }

    /// Glob pattern matching input files, with glob metacharacters in the directory escaped.
    pub fn input_glob(&self) -> String {
        let dir = glob::Pattern::escape(&self.input_dir.to_string_lossy());
        let mut pattern = dir;
        if !pattern.is_empty() && !pattern.ends_with(std::path::MAIN_SEPARATOR) && !pattern.ends_with('/') {
            pattern.push('/');
        }
        pattern.push_str(&self.pattern);
        pattern
    }

    /// Where the chart titled `title` is written.
    pub fn output_path(&self, title: &str) -> PathBuf {
        self.output_dir.join(format!("{title}.{OUTPUT_EXTENSION}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_fixed_directories() {
        let c = Config::default();
        assert_eq!(c.input_dir, PathBuf::from("benchmark_results"));
        assert_eq!(c.output_dir, PathBuf::from("benchmark_result_graphs"));
        assert_eq!(c.input_glob(), "benchmark_results/*.*");
    }

    #[test]
    fn output_path_uses_title() {
        let c = Config::default();
        assert_eq!(c.output_path("test1"), PathBuf::from("benchmark_result_graphs").join("test1.svg"));
    }

    #[test]
    fn glob_metacharacters_in_dir_are_escaped() {
        let c = Config::with_dirs("runs[1]", "out");
        assert_eq!(c.input_glob(), "runs[[]1[]]/*.*");
    }
}
