pub mod use_cases;

pub use use_cases::company_grouper::CompanyGroups;
pub use use_cases::dataset_loader::DatasetLoader;
pub use use_cases::panel_analyzer::PanelAnalyzer;
