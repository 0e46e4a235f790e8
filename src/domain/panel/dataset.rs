// ============================================================
// DATASET
// ============================================================
// The loaded panel snapshot every analysis runs against: ordered
// column universe, normalized rows, and load provenance.

use super::row::Row;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable dataset snapshot. `columns` preserves spreadsheet
/// header order, which keeps column detection deterministic; rows may
/// individually be missing keys from that universe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub source_name: String,
    /// SHA-256 of the source bytes, when the source could provide it
    pub fingerprint: Option<String>,
    pub loaded_at: DateTime<Utc>,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(source_name: impl Into<String>, columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            source_name: source_name.into(),
            fingerprint: None,
            loaded_at: Utc::now(),
            columns,
            rows,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header-line info for the dashboard ("N rows, M columns").
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            source_name: self.source_name.clone(),
            row_count: self.rows.len(),
            column_count: self.columns.len(),
            fingerprint: self.fingerprint.clone(),
            loaded_at: self.loaded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub source_name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub fingerprint: Option<String>,
    pub loaded_at: DateTime<Utc>,
}
