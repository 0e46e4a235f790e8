pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CompanyGroups, DatasetLoader, PanelAnalyzer};
pub use domain::error::{AppError, Result};
pub use domain::panel::{
    AnalysisConfig, AnalysisReport, CellValue, Dataset, GroupSelector, Row, Selection,
    ALL_COMPANIES,
};
pub use infrastructure::config::DashboardConfig;
pub use infrastructure::ingest::{FileSource, IngestConfig, SpreadsheetSource};
pub use infrastructure::telemetry::init_tracing;
