// File: crates/bench-graphs/src/diff.rs
// Summary: Percentage difference of each series against the baseline series.

use std::fmt;

use crate::error::DiffError;
use crate::loader::SeriesSet;

/// Decimal places kept in reported averages.
pub const DIFF_PRECISION: usize = 2;

/// `a` as a percentage of `b`.
pub fn percentage_difference(a: f64, b: f64) -> Result<f64, DiffError> {
    if b == 0.0 {
        return Err(DiffError::DivisionByZero { index: 0 });
    }
    Ok(a / b * 100.0)
}

/// Mean of `percentage_difference(baseline[i], other[i])` over the overlapping prefix.
pub fn difference_average(baseline: &[f64], other: &[f64]) -> Result<f64, DiffError> {
    let ratios = baseline
        .iter()
        .zip(other)
        .enumerate()
        .map(|(index, (&a, &b))| {
            percentage_difference(a, b).map_err(|_| DiffError::DivisionByZero { index })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if ratios.is_empty() {
        return Err(DiffError::EmptyOverlap);
    }
    Ok(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Round the exact binary value to `places` decimals, ties to even.
/// 78.125 is exactly representable and rounds to 78.12.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // fixed-precision formatting expands the exact value and breaks ties to even
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Shortest round-trip form with at least one fractional digit (`50.0`, `33.33`).
/// Exponent forms carry a sign and two digits (`1e+16`, `2.5e-05`); NaN prints as `nan`.
pub fn format_average(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// One annotation line: the baseline's average percentage of another series.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub baseline: String,
    pub other: String,
    /// Already rounded to `DIFF_PRECISION` places.
    pub average: f64,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: {}%", self.baseline, self.other, format_average(self.average))
    }
}

/// Compare the first series against every later one, in file order.
/// Sets with fewer than two series produce no comparisons.
pub fn compare_to_baseline(set: &SeriesSet) -> Result<Vec<Comparison>, DiffError> {
    let Some((base_name, base_values)) = set.baseline() else {
        return Ok(Vec::new());
    };
    set.iter()
        .skip(1)
        .map(|(name, values)| -> Result<Comparison, DiffError> {
            let average = round_to(difference_average(base_values, values)?, DIFF_PRECISION);
            Ok(Comparison { baseline: base_name.to_string(), other: name.to_string(), average })
        })
        .collect()
}

/// Annotation block: one comparison per line, each line newline-terminated.
pub fn annotation_text(comparisons: &[Comparison]) -> String {
    comparisons.iter().map(|c| format!("{c}\n")).collect()
}
