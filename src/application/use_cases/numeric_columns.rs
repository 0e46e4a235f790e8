// ============================================================
// NUMERIC COLUMN DETECTOR
// ============================================================
// Decides which columns the calculators run on by sampling the first
// non-empty row. A column only counts when that row holds a real
// numeric value under it and the name is not excluded by config.

use crate::domain::panel::{AnalysisConfig, CellValue, Row};
use tracing::debug;

// NOTE: single-sample detection is intentional. A column that is
// numeric elsewhere but missing or textual in the sample row stays
// excluded for the whole dataset, and a per-company subset may detect
// a different set than the full dataset when sparsity differs.

/// Detect the analyzable numeric columns of a dataset subset, in the
/// dataset's column order. Empty input detects nothing.
pub fn numeric_columns(columns: &[String], rows: &[Row], config: &AnalysisConfig) -> Vec<String> {
    let sample = match rows.iter().find(|row| !row.is_empty()) {
        Some(row) => row,
        None => return Vec::new(),
    };

    let detected: Vec<String> = columns
        .iter()
        .filter(|column| {
            sample
                .get(column)
                .map(CellValue::is_number)
                .unwrap_or(false)
                && !config.is_excluded(column)
        })
        .cloned()
        .collect();

    debug!(
        detected = detected.len(),
        candidates = columns.len(),
        "numeric column detection"
    );

    detected
}
