// ============================================================
// SPREADSHEET INGESTION
// ============================================================
// The one asynchronous boundary of the system: turning an uploaded
// file into raw positional sheet data. Parsing itself is synchronous
// and runs on the blocking pool.

mod csv_reader;
mod value_parser;
mod xlsx_reader;

pub use csv_reader::{decode_bytes, CsvSheetReader};
pub use value_parser::parse_cell;
pub use xlsx_reader::{convert_cell, XlsxSheetReader};

use crate::domain::error::{AppError, Result};
use crate::domain::panel::CellValue;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Positional sheet data straight out of a parser, before any
/// normalization: raw headers, cell rows, and the source fingerprint
/// when the source could hash its bytes.
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub fingerprint: Option<String>,
}

/// Configuration for file ingestion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Pinned CSV delimiter; per-file detection runs when unset
    pub delimiter: Option<char>,

    /// Worksheet to load from workbook files; first sheet when unset
    pub sheet: Option<String>,
}

impl IngestConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() {
                return Err("delimiter must be a single ASCII character".to_string());
            }
        }
        if let Some(sheet) = &self.sheet {
            if sheet.trim().is_empty() {
                return Err("sheet must not be blank".to_string());
            }
        }
        Ok(())
    }
}

/// Where raw sheet data comes from. Object-safe so use cases can be
/// driven by uploads, fixtures, or in-memory data alike.
#[async_trait]
pub trait SpreadsheetSource: Send + Sync {
    /// Source label for logs and the dataset summary
    fn name(&self) -> String;

    async fn fetch(&self) -> Result<RawSheet>;
}

/// File-backed source dispatching on the file extension
pub struct FileSource {
    path: PathBuf,
    config: IngestConfig,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: IngestConfig::default(),
        }
    }

    pub fn with_config(mut self, config: IngestConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl SpreadsheetSource for FileSource {
    fn name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string()
    }

    async fn fetch(&self) -> Result<RawSheet> {
        self.config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("invalid ingest config: {}", e)))?;

        let path = self.path.clone();
        let config = self.config.clone();

        let joined = tokio::task::spawn_blocking(move || read_sheet(&path, &config)).await;
        match joined {
            Ok(result) => result,
            Err(err) => Err(AppError::Internal(format!(
                "sheet parsing task failed: {}",
                err
            ))),
        }
    }
}

/// Parse one spreadsheet file, fingerprinting its bytes on the way in.
fn read_sheet(path: &Path, config: &IngestConfig) -> Result<RawSheet> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" | "tsv" | "txt" => {
            let bytes = std::fs::read(path)?;
            let mut reader = CsvSheetReader::new();
            if let Some(delimiter) = config.delimiter {
                reader = reader.with_delimiter(delimiter as u8);
            }
            let mut sheet = reader.read_bytes(&bytes)?;
            sheet.fingerprint = Some(sha256_hex(&bytes));
            Ok(sheet)
        }
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => {
            let bytes = std::fs::read(path)?;
            let mut reader = XlsxSheetReader::new();
            if let Some(sheet_name) = &config.sheet {
                reader = reader.with_sheet(sheet_name.clone());
            }
            let mut sheet = reader.read_path(path)?;
            sheet.fingerprint = Some(sha256_hex(&bytes));
            Ok(sheet)
        }
        other => Err(AppError::ValidationError(format!(
            "unsupported spreadsheet extension '{}'",
            other
        ))),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_file(extension: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("panelboard-{}.{}", Uuid::new_v4(), extension));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_file_source_reads_csv() {
        let path = temp_file("csv", b"Company,ROA\nAlpha,4.5\n");
        let source = FileSource::new(&path);

        let sheet = source.fetch().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(sheet.headers, vec!["Company", "ROA"]);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0][1], CellValue::Number(4.5));
        // 64 hex chars of SHA-256
        assert_eq!(sheet.fingerprint.as_ref().unwrap().len(), 64);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let path = temp_file("pdf", b"%PDF-");
        let source = FileSource::new(&path);

        let result = source.fetch().await;
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/panel.csv");

        assert!(matches!(source.fetch().await, Err(AppError::IoError(_))));
    }

    // The low byte of 'Ł' is 'A', which appears in the data, so a
    // truncating cast would mis-split the rows instead of failing
    #[tokio::test]
    async fn test_fetch_rejects_non_ascii_delimiter() {
        let path = temp_file("csv", b"Company,ROA\nAlpha,4.5\n");
        let config = IngestConfig {
            delimiter: Some('\u{0141}'),
            ..Default::default()
        };
        let source = FileSource::new(&path).with_config(config);

        let result = source.fetch().await;
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_ingest_config_validation() {
        assert!(IngestConfig::default().validate().is_ok());

        let config = IngestConfig {
            delimiter: Some('é'),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = IngestConfig {
            sheet: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_identical_bytes_share_a_fingerprint() {
        assert_eq!(sha256_hex(b"panel"), sha256_hex(b"panel"));
        assert_ne!(sha256_hex(b"panel"), sha256_hex(b"Panel"));
    }
}
