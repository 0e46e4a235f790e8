// ============================================================
// ROW NORMALIZER
// ============================================================
// Cleans raw parsed spreadsheet rows before anything else sees them:
// keys are trimmed, blank keys and auto-generated "empty" column
// names are dropped. Values pass through untouched, nulls included.

use crate::domain::panel::{CellValue, Row};

// NOTE:
// - Unnamed spreadsheet columns arrive as "" or as placeholder headers
//   like "__EMPTY" / "__EMPTY_1", so the drop rule is: blank after
//   trimming, or containing "empty" in any case.
// - Duplicate keys after trimming behave like repeated map insertion:
//   the last value wins.

/// Trim a raw column key and decide whether it survives
/// normalization. `None` means the whole entry is dropped.
pub fn normalize_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.to_lowercase().contains("empty") {
        return None;
    }
    Some(trimmed.to_string())
}

/// Normalize one raw row (ordered key/value pairs straight out of
/// parsing, missing cells already null) into a clean `Row`.
pub fn normalize_row<'a>(pairs: impl IntoIterator<Item = (&'a str, CellValue)>) -> Row {
    let mut row = Row::new();
    for (raw_key, value) in pairs {
        if let Some(key) = normalize_key(raw_key) {
            row.insert(key, value);
        }
    }
    row
}

/// Normalize a raw header list into the dataset's column universe:
/// same keep/drop rule as rows, first occurrence fixes the order.
pub fn normalize_headers(raw_headers: &[String]) -> Vec<String> {
    let mut columns = Vec::new();
    for raw in raw_headers {
        if let Some(key) = normalize_key(raw) {
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
    }
    columns
}
