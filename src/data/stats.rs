//! Numeric reductions behind the charts, kept out of the renderers so they
//! are pure over plain slices.

use super::model::PlayerRecord;

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

/// Axis labels of the 2×2 correlation matrix, in row/column order.
pub const CORRELATION_LABELS: [&str; 2] = ["Minutes Per Game", "Points Per Game"];

/// Pairwise Pearson correlation matrix over minutes and points.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    /// `cells[i][j]` correlates `CORRELATION_LABELS[i]` with `[j]`.
    /// `None` marks an undefined coefficient; it must be surfaced, never
    /// rendered as a number.
    pub cells: [[Option<f64>; 2]; 2],
}

impl CorrelationMatrix {
    /// Whether any cell is undefined (fewer than 2 rows, or zero variance).
    pub fn has_undefined(&self) -> bool {
        self.cells.iter().flatten().any(Option::is_none)
    }
}

/// Pearson correlation coefficient of two equal-length samples.
///
/// `None` when there are fewer than two points or either sample has zero
/// variance — the coefficient is undefined there, not zero.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let mean = |vs: &[f64]| vs.iter().sum::<f64>() / n as f64;
    let (mx, my) = (mean(&xs[..n]), mean(&ys[..n]));

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs[..n].iter().zip(&ys[..n]) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx) * (x - mx);
        var_y += (y - my) * (y - my);
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

/// Correlation matrix restricted to {minutes, points} over a filtered view.
pub fn minutes_points_correlation(view: &[&PlayerRecord]) -> CorrelationMatrix {
    let minutes: Vec<f64> = view.iter().map(|r| r.minutes_per_game).collect();
    let points: Vec<f64> = view.iter().map(|r| r.points_per_game).collect();
    let axes = [&minutes, &points];

    let mut cells = [[None; 2]; 2];
    for (i, xs) in axes.iter().enumerate() {
        for (j, ys) in axes.iter().enumerate() {
            cells[i][j] = pearson(xs, ys);
        }
    }
    CorrelationMatrix { cells }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram over a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Center of bin `i`, for bar placement.
    pub fn center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }
}

/// Bin `values` into `bins` equal-width buckets spanning their range.
///
/// `None` on empty input. All-equal input degenerates to one occupied bin of
/// unit width centered on the value.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Some(Histogram {
            start: min - 0.5,
            bin_width: 1.0,
            counts: vec![values.len()],
        });
    }

    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let i = (((v - min) / bin_width) as usize).min(bins - 1);
        counts[i] += 1;
    }
    Some(Histogram {
        start: min,
        bin_width,
        counts,
    })
}

// ---------------------------------------------------------------------------
// Box plot summary
// ---------------------------------------------------------------------------

/// Five-number summary with Tukey's 1.5·IQR whisker fences.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub low_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub high_whisker: f64,
    /// Values beyond the whisker fences, drawn as individual points.
    pub outliers: Vec<f64>,
}

/// Summarize one group's values. `None` on empty input.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let (low_fence, high_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    // Whiskers reach the outermost data points inside the fences.
    let low_whisker = sorted
        .iter()
        .cloned()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1);
    let high_whisker = sorted
        .iter()
        .rev()
        .cloned()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .cloned()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Some(BoxStats {
        low_whisker,
        q1,
        median,
        q3,
        high_whisker,
        outliers,
    })
}

/// Linearly interpolated quantile of pre-sorted data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}
