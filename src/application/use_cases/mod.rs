pub mod company_grouper;
pub mod correlation;
pub mod dataset_loader;
pub mod descriptive_stats;
pub mod numeric_columns;
pub mod panel_analyzer;
pub mod row_normalizer;
pub mod trend_extractor;
