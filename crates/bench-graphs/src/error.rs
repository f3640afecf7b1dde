// File: crates/bench-graphs/src/error.rs
// Summary: Error types for loading benchmark files and computing differences.

use std::num::ParseFloatError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open benchmark file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read benchmark data")]
    Read(#[from] csv::Error),
    #[error("line {line}: series `{series}` has non-numeric value `{token}`")]
    Parse {
        line: u64,
        series: String,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiffError {
    #[error("division by zero: comparison value at index {index} is 0")]
    DivisionByZero { index: usize },
    #[error("series share no overlapping samples")]
    EmptyOverlap,
}
