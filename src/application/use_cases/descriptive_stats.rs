// ============================================================
// DESCRIPTIVE STATISTICS CALCULATOR
// ============================================================
// Per-column N, mean, population SD, min, quartiles, max. Pure: no
// errors, no mutation of input; a column with no usable values yields
// the all-zero sentinel record instead of failing.

use crate::domain::panel::{ColumnSummary, Row};

/// Summarize every detected numeric column, in detection order.
pub fn summarize_columns(rows: &[Row], columns: &[String]) -> Vec<ColumnSummary> {
    columns
        .iter()
        .map(|column| summarize_column(rows, column))
        .collect()
}

/// Summarize one column. Rows whose cell fails numeric coercion
/// (null, absent, non-numeric text) are excluded from N and from
/// every statistic.
pub fn summarize_column(rows: &[Row], column: &str) -> ColumnSummary {
    let mut values: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.get_number(column))
        .collect();

    if values.is_empty() {
        return ColumnSummary::empty(column);
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    // Population variance: divisor N, not the Bessel-corrected N - 1
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    let sd = variance.sqrt();

    values.sort_by(f64::total_cmp);

    ColumnSummary {
        column: column.to_string(),
        n,
        mean,
        sd,
        min: values[0],
        q1: percentile(&values, 0.25),
        median: percentile(&values, 0.5),
        q3: percentile(&values, 0.75),
        max: values[n - 1],
    }
}

/// Nearest-rank percentile: element at floor((N - 1) * p) of the
/// sorted values, no interpolation between adjacent ranks.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let idx = ((sorted.len() - 1) as f64 * p).floor() as usize;
    sorted[idx]
}
