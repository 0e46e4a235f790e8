// ============================================================
// DATASET LOADER
// ============================================================
// Turns raw sheet data from any source into the normalized dataset
// snapshot the analysis pipeline runs against.

use crate::application::use_cases::row_normalizer::{normalize_headers, normalize_row};
use crate::domain::error::Result;
use crate::domain::panel::{CellValue, Dataset, Row};
use crate::infrastructure::ingest::{FileSource, IngestConfig, SpreadsheetSource};
use std::path::PathBuf;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct DatasetLoader;

impl DatasetLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and normalize a dataset from any spreadsheet source.
    pub async fn load(&self, source: &dyn SpreadsheetSource) -> Result<Dataset> {
        let load_id = Uuid::new_v4();
        let sheet = source.fetch().await.map_err(|err| {
            error!(load_id = %load_id, source = %source.name(), error = %err, "dataset load failed");
            err
        })?;

        let columns = normalize_headers(&sheet.headers);
        let rows: Vec<Row> = sheet
            .rows
            .iter()
            .map(|cells| {
                // Rows are keyed positionally against the raw headers;
                // cells past the row's end count as null.
                normalize_row(sheet.headers.iter().enumerate().map(|(idx, header)| {
                    (
                        header.as_str(),
                        cells.get(idx).cloned().unwrap_or(CellValue::Null),
                    )
                }))
            })
            .collect();

        let mut dataset = Dataset::new(source.name(), columns, rows);
        if let Some(fingerprint) = sheet.fingerprint {
            dataset = dataset.with_fingerprint(fingerprint);
        }

        info!(
            load_id = %load_id,
            source = %dataset.source_name,
            rows = dataset.rows.len(),
            columns = dataset.columns.len(),
            fingerprint = dataset.fingerprint.as_deref().unwrap_or("-"),
            "dataset loaded"
        );

        Ok(dataset)
    }

    /// Convenience wrapper for loading straight from a file path.
    pub async fn load_path(
        &self,
        path: impl Into<PathBuf>,
        config: IngestConfig,
    ) -> Result<Dataset> {
        let source = FileSource::new(path).with_config(config);
        self.load(&source).await
    }
}
