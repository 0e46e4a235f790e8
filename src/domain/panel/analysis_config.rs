// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Tunable column conventions of the panel dataset: which columns
// identify the company, which are never analyzed, which label trends

use serde::{Deserialize, Serialize};

/// Configuration for panel analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Columns never treated as analyzable numeric variables, even
    /// when their sampled value is numeric (default: Year, CSR_pct_std)
    pub excluded_columns: Vec<String>,

    /// Company identifier columns, checked in order per row
    /// (default: "Company", then "company")
    pub company_columns: Vec<String>,

    /// Group label for rows with no company value (default: "Unknown")
    pub fallback_group: String,

    /// Columns providing the x-axis label of trend series, checked in
    /// order; row ordinals are used when none is present
    pub label_columns: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            excluded_columns: vec!["Year".to_string(), "CSR_pct_std".to_string()],
            company_columns: vec!["Company".to_string(), "company".to_string()],
            fallback_group: "Unknown".to_string(),
            label_columns: vec!["Year".to_string(), "year".to_string()],
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-name check against the exclusion list
    pub fn is_excluded(&self, column: &str) -> bool {
        self.excluded_columns.iter().any(|c| c == column)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.company_columns.is_empty() {
            return Err("company_columns must not be empty".to_string());
        }
        if self.company_columns.iter().any(|c| c.trim().is_empty()) {
            return Err("company_columns must not contain blank names".to_string());
        }
        if self.fallback_group.trim().is_empty() {
            return Err("fallback_group must not be blank".to_string());
        }
        Ok(())
    }
}
