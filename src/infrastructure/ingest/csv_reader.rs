// ============================================================
// CSV SHEET READER
// ============================================================
// Decode uploaded CSV bytes and parse them into a raw sheet:
// encoding fallback, delimiter detection, typed cells

use super::value_parser::parse_cell;
use super::RawSheet;
use crate::domain::error::{AppError, Result};
use crate::domain::panel::CellValue;
use csv::{ReaderBuilder, Trim};
use tracing::warn;

/// CSV reader with delimiter detection
pub struct CsvSheetReader {
    /// Pinned delimiter; `None` means detect per file
    delimiter: Option<u8>,
}

impl Default for CsvSheetReader {
    fn default() -> Self {
        Self { delimiter: None }
    }
}

impl CsvSheetReader {
    /// Create a new reader with delimiter detection enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a delimiter instead of detecting one
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Decode and parse raw file bytes
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<RawSheet> {
        let content = decode_bytes(bytes);
        self.parse_content(&content)
    }

    /// Parse already-decoded CSV content. The first record is the
    /// header row; an empty input yields an empty sheet, not an error.
    pub fn parse_content(&self, content: &str) -> Result<RawSheet> {
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(content));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let mut headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows: Vec<Vec<CellValue>> = Vec::new();
        let mut widest = headers.len();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("failed to parse CSV record {}: {}", index + 1, e))
            })?;

            let cells: Vec<CellValue> = record.iter().map(parse_cell).collect();
            widest = widest.max(cells.len());
            rows.push(cells);
        }

        if widest > headers.len() {
            warn!(
                named = headers.len(),
                widest, "records wider than the header row, extra columns are unnamed"
            );
            headers.resize(widest, String::new());
        }
        // Missing trailing cells are null so every row lines up with
        // the header list
        for row in &mut rows {
            row.resize(headers.len(), CellValue::Null);
        }

        Ok(RawSheet {
            headers,
            rows,
            fingerprint: None,
        })
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe) by
    /// scoring count consistency across the first lines.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample: Vec<&str> = content.lines().take(10).collect();
        if sample.is_empty() {
            return b',';
        }

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &candidate in &candidates {
            let counts: Vec<usize> = sample
                .iter()
                .map(|line| line.bytes().filter(|&b| b == candidate).count())
                .collect();

            let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
            let variance = counts
                .iter()
                .map(|&c| (c as f32 - avg).powi(2))
                .sum::<f32>()
                / counts.len() as f32;

            // Frequent and consistent wins; erratic counts are penalized
            let score = avg / (1.0 + variance.sqrt());
            if score > best_score {
                best_score = score;
                best_delimiter = candidate;
            }
        }

        best_delimiter
    }
}

/// Decode file bytes: BOM first, then strict UTF-8, then Windows-1252
/// so no byte sequence is unreadable.
pub fn decode_bytes(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}
