// ============================================================
// TREND EXTRACTOR
// ============================================================
// Chart-ready (label, value) series per numeric column. Labels come
// from the configured label column (Year) when the row has one, else
// the 1-based row ordinal; rows without a usable value are skipped.

use crate::domain::panel::{AnalysisConfig, Row, TrendPoint, TrendSeries};

/// One series per detected numeric column, in detection order.
pub fn trend_series(rows: &[Row], columns: &[String], config: &AnalysisConfig) -> Vec<TrendSeries> {
    columns
        .iter()
        .map(|column| TrendSeries {
            column: column.clone(),
            points: column_points(rows, column, config),
        })
        .collect()
}

fn column_points(rows: &[Row], column: &str, config: &AnalysisConfig) -> Vec<TrendPoint> {
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let value = row.get_number(column)?;
            Some(TrendPoint {
                label: point_label(row, idx, config),
                value,
            })
        })
        .collect()
}

fn point_label(row: &Row, idx: usize, config: &AnalysisConfig) -> String {
    for column in &config.label_columns {
        if let Some(value) = row.get(column) {
            if !value.is_null() {
                return value.to_string();
            }
        }
    }
    (idx + 1).to_string()
}
