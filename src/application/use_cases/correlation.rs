// ============================================================
// CORRELATION CALCULATOR
// ============================================================
// Full pairwise Pearson matrix over the detected numeric columns.
// Rows are dropped per pair (pairwise deletion); undefined
// coefficients (no pairs, zero variance) come back as the 0 sentinel
// so the matrix is always fully renderable.

use crate::domain::panel::{CorrelationMatrix, Row};
use std::collections::HashMap;

/// Build the complete matrix: every ordered (x, y) cell of the given
/// column list, diagonal included.
pub fn correlation_matrix(rows: &[Row], columns: &[String]) -> CorrelationMatrix {
    let mut values = HashMap::with_capacity(columns.len());

    for x in columns {
        let mut matrix_row = HashMap::with_capacity(columns.len());
        for y in columns {
            matrix_row.insert(y.clone(), pearson(rows, x, y));
        }
        values.insert(x.clone(), matrix_row);
    }

    CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    }
}

/// Pearson coefficient for one column pair over the rows where both
/// cells coerce to numbers.
pub fn pearson(rows: &[Row], x: &str, y: &str) -> f64 {
    let pairs: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|row| match (row.get_number(x), row.get_number(y)) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect();

    if pairs.is_empty() {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        numerator += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    numerator / denominator
}
