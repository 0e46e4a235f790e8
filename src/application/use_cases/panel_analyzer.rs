// ============================================================
// PANEL ANALYZER USE CASE
// ============================================================
// Orchestrate selection resolution, numeric column detection, and
// the calculators for one dashboard state. Pure and cache-free:
// every call recomputes against the resolved subset.

use crate::application::use_cases::company_grouper::CompanyGroups;
use crate::application::use_cases::correlation::correlation_matrix;
use crate::application::use_cases::descriptive_stats::summarize_columns;
use crate::application::use_cases::numeric_columns::numeric_columns;
use crate::application::use_cases::trend_extractor::trend_series;
use crate::domain::error::{AppError, Result};
use crate::domain::panel::{AnalysisConfig, AnalysisReport, Dataset, GroupSelector, Selection};
use tracing::debug;

/// Panel analysis use case
pub struct PanelAnalyzer {
    config: AnalysisConfig,
}

impl PanelAnalyzer {
    /// Create a new analyzer
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(AnalysisConfig::default())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Partition a freshly loaded dataset into company groups. Built
    /// once per load; selections resolve against it afterwards.
    pub fn group(&self, dataset: &Dataset) -> CompanyGroups {
        CompanyGroups::build(dataset, &self.config)
    }

    /// Run every enabled calculator against the selected subset.
    /// "All Companies" resolves to the full dataset's rows untouched;
    /// an unknown company key is the one orchestration-level error.
    pub fn analyze(
        &self,
        dataset: &Dataset,
        groups: &CompanyGroups,
        selection: &Selection,
    ) -> Result<AnalysisReport> {
        let rows = match &selection.group {
            GroupSelector::AllCompanies => dataset.rows.as_slice(),
            GroupSelector::Company(name) => groups.rows_for(name).ok_or_else(|| {
                AppError::NotFound(format!("no company group named '{}'", name))
            })?,
        };

        // The numeric column set is recomputed per subset: sparsity can
        // make a per-company sample row miss columns the full set has
        let columns = numeric_columns(&dataset.columns, rows, &self.config);

        debug!(
            group = %selection.group,
            rows = rows.len(),
            numeric_columns = columns.len(),
            "running panel analysis"
        );

        let statistics = selection
            .show_statistics
            .then(|| summarize_columns(rows, &columns));
        let correlation = selection
            .show_correlation
            .then(|| correlation_matrix(rows, &columns));
        let trends = selection
            .show_trends
            .then(|| trend_series(rows, &columns, &self.config));

        Ok(AnalysisReport {
            group: selection.group.label().to_string(),
            row_count: rows.len(),
            columns,
            statistics,
            correlation,
            trends,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::panel::{CellValue, Row};

    fn panel_row(company: &str, year: f64, roa: f64, roe: Option<f64>) -> Row {
        let mut row = Row::new();
        row.insert("Company".to_string(), CellValue::Text(company.to_string()));
        row.insert("Year".to_string(), CellValue::Number(year));
        row.insert("ROA".to_string(), CellValue::Number(roa));
        if let Some(value) = roe {
            row.insert("ROE".to_string(), CellValue::Number(value));
        }
        row.insert("CSR_pct_std".to_string(), CellValue::Number(0.5));
        row
    }

    fn panel_dataset() -> Dataset {
        Dataset::new(
            "panel.csv",
            vec![
                "Company".to_string(),
                "Year".to_string(),
                "ROA".to_string(),
                "ROE".to_string(),
                "CSR_pct_std".to_string(),
            ],
            vec![
                panel_row("Alpha", 2019.0, 2.0, Some(4.0)),
                panel_row("Alpha", 2020.0, 3.0, Some(6.0)),
                panel_row("Beta", 2019.0, 5.0, None),
                panel_row("Beta", 2020.0, 7.0, Some(1.0)),
            ],
        )
    }

    #[test]
    fn test_all_companies_analyzes_full_dataset() {
        let analyzer = PanelAnalyzer::default_config();
        let dataset = panel_dataset();
        let groups = analyzer.group(&dataset);

        let report = analyzer
            .analyze(&dataset, &groups, &Selection::default())
            .unwrap();

        assert_eq!(report.group, "All Companies");
        assert_eq!(report.row_count, 4);
        assert_eq!(report.columns, vec!["ROA", "ROE"]);

        let stats = report.statistics.unwrap();
        assert_eq!(stats[0].column, "ROA");
        assert_eq!(stats[0].n, 4);
        // ROE is missing in one row, so its N drops without touching ROA
        assert_eq!(stats[1].column, "ROE");
        assert_eq!(stats[1].n, 3);
    }

    #[test]
    fn test_company_subset_redetects_columns() {
        let analyzer = PanelAnalyzer::default_config();
        let dataset = panel_dataset();
        let groups = analyzer.group(&dataset);

        let report = analyzer
            .analyze(&dataset, &groups, &Selection::for_company("Beta"))
            .unwrap();

        assert_eq!(report.group, "Beta");
        assert_eq!(report.row_count, 2);
        // Beta's sample row has no ROE cell, so only ROA is detected
        assert_eq!(report.columns, vec!["ROA"]);
    }

    #[test]
    fn test_unknown_company_is_not_found() {
        let analyzer = PanelAnalyzer::default_config();
        let dataset = panel_dataset();
        let groups = analyzer.group(&dataset);

        let result = analyzer.analyze(&dataset, &groups, &Selection::for_company("Gamma"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_display_flags_gate_report_blocks() {
        let analyzer = PanelAnalyzer::default_config();
        let dataset = panel_dataset();
        let groups = analyzer.group(&dataset);

        let selection = Selection {
            show_statistics: false,
            show_trends: false,
            ..Selection::default()
        };
        let report = analyzer.analyze(&dataset, &groups, &selection).unwrap();

        assert!(report.statistics.is_none());
        assert!(report.trends.is_none());
        assert!(report.correlation.is_some());
    }

    #[test]
    fn test_repeated_analysis_is_identical() {
        let analyzer = PanelAnalyzer::default_config();
        let dataset = panel_dataset();
        let groups = analyzer.group(&dataset);
        let selection = Selection::for_company("Alpha");

        let first = analyzer.analyze(&dataset, &groups, &selection).unwrap();
        let second = analyzer.analyze(&dataset, &groups, &selection).unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_trends_carry_year_labels() {
        let analyzer = PanelAnalyzer::default_config();
        let dataset = panel_dataset();
        let groups = analyzer.group(&dataset);

        let report = analyzer
            .analyze(&dataset, &groups, &Selection::for_company("Alpha"))
            .unwrap();

        let trends = report.trends.unwrap();
        let roa = trends.iter().find(|s| s.column == "ROA").unwrap();
        let labels: Vec<&str> = roa.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2019", "2020"]);
    }
}
