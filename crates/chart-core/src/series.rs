// File: crates/chart-core/src/series.rs
// Summary: Labeled line series model. Stroke colors come from the theme palette by index.

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text; unlabeled series are drawn but not listed in the legend.
    pub label: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { label: None, data_xy: data }
    }

    /// Pair `xs` and `ys` by index. The longer slice is cut to the shorter one.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Self {
        Self::with_data(xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `(x_min, x_max, y_min, y_max)` over finite points, `None` when there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xy_truncates_to_shorter() {
        let s = Series::from_xy(&[0.1, 0.2, 0.3], &[5.0, 6.0]);
        assert_eq!(s.data_xy, vec![(0.1, 5.0), (0.2, 6.0)]);
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let s = Series::with_data(vec![(0.0, 1.0), (1.0, f64::INFINITY), (2.0, -3.0)]);
        assert_eq!(s.bounds(), Some((0.0, 2.0, -3.0, 1.0)));
        assert_eq!(Series::with_data(Vec::new()).bounds(), None);
    }
}
