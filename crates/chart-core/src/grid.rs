// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `span / target` up to a 1-2-5 step.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        2.0
    } else if norm < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions on a 1-2-5 grid inside `[min, max]`, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min { return vec![min]; }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    // tolerance keeps the last tick when max sits exactly on the grid
    let limit = max + step * 1e-9;
    let mut out = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > limit { break; }
        // avoid printing "-0"
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        i += 1;
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_land_on_round_values() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let t = nice_ticks(0.05, 1.05, 5);
        assert_eq!(t.len(), 5);
        assert!((t[0] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    }

    #[test]
    fn tick_labels_follow_step() {
        assert_eq!(format_tick(0.2, 0.2), "0.2");
        assert_eq!(format_tick(40.0, 20.0), "40");
        assert_eq!(format_tick(0.05, 0.05), "0.05");
    }
}
