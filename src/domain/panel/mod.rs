// ============================================================
// PANEL DOMAIN LAYER
// ============================================================
// Core types and value objects for panel data analysis
// No I/O, no async, no external dependencies beyond serde/chrono

mod analysis_config;
mod cell_value;
mod dataset;
mod report;
mod row;
mod selection;

pub use analysis_config::AnalysisConfig;
pub use cell_value::CellValue;
pub use dataset::{Dataset, DatasetSummary};
pub use report::{AnalysisReport, ColumnSummary, CorrelationMatrix, TrendPoint, TrendSeries};
pub use row::Row;
pub use selection::{GroupSelector, Selection, ALL_COMPANIES};
