// ============================================================
// WORKBOOK SHEET READER
// ============================================================
// Excel/ODS ingestion via calamine. Cells arrive typed from the
// workbook, so unlike CSV no text-to-number inference runs here;
// the sheet's own types are respected.

use super::RawSheet;
use crate::domain::error::{AppError, Result};
use crate::domain::panel::CellValue;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::debug;

/// Workbook reader for XLSX/XLS/XLSB/ODS files
pub struct XlsxSheetReader {
    /// Worksheet to load; `None` means the first sheet
    sheet: Option<String>,
}

impl Default for XlsxSheetReader {
    fn default() -> Self {
        Self { sheet: None }
    }
}

impl XlsxSheetReader {
    /// Create a new reader targeting the first worksheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a named worksheet instead of the first one
    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet = Some(name.into());
        self
    }

    /// Read the configured worksheet into a raw sheet. The first row
    /// is the header row; a workbook without worksheets is an error,
    /// an empty worksheet is just an empty sheet.
    pub fn read_path(&self, path: &Path) -> Result<RawSheet> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| AppError::ParseError(format!("failed to open workbook: {}", e)))?;

        let names = workbook.sheet_names();
        let sheet_name = resolve_sheet(&names, self.sheet.as_deref())?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            AppError::ParseError(format!("failed to read worksheet '{}': {}", sheet_name, e))
        })?;

        let mut rows_iter = range.rows();

        let headers: Vec<String> = rows_iter
            .next()
            .map(|row| row.iter().map(header_label).collect())
            .unwrap_or_default();

        let rows: Vec<Vec<CellValue>> = rows_iter
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        debug!(
            sheet = %sheet_name,
            columns = headers.len(),
            rows = rows.len(),
            "worksheet loaded"
        );

        Ok(RawSheet {
            headers,
            rows,
            fingerprint: None,
        })
    }
}

/// Pick the worksheet to load: the requested name when one is
/// configured, otherwise the workbook's first sheet.
fn resolve_sheet(names: &[String], requested: Option<&str>) -> Result<String> {
    match requested {
        Some(wanted) => names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| {
                AppError::ParseError(format!("worksheet '{}' not found in workbook", wanted))
            }),
        None => names
            .first()
            .cloned()
            .ok_or_else(|| AppError::ParseError("workbook has no worksheets".to_string())),
    }
}

/// Map one workbook cell to a cell value. Blank strings and error
/// cells count as missing; booleans become their text form because
/// the panel cell domain is number/string/null.
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) if f.is_finite() => CellValue::Number(*f),
        Data::Float(_) => CellValue::Null,
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => {
                let formatted = if naive.time() == chrono::NaiveTime::MIN {
                    naive.format("%Y-%m-%d")
                } else {
                    naive.format("%Y-%m-%dT%H:%M:%S")
                };
                CellValue::Text(formatted.to_string())
            }
            // Out-of-range serials keep their raw number
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Null,
    }
}

/// Header cells stringify through the same conversion; empty headers
/// stay empty for the normalizer to drop.
fn header_label(cell: &Data) -> String {
    convert_cell(cell).to_string()
}
