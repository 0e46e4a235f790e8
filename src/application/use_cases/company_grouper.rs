// ============================================================
// COMPANY GROUPER
// ============================================================
// Partitions the loaded dataset into per-company buckets. The full
// dataset itself is never copied into a bucket: the synthetic
// "All Companies" selector resolves to it directly.

use crate::domain::panel::{AnalysisConfig, Dataset, GroupSelector, Row};
use std::collections::HashMap;

/// Per-company partition of a dataset, iteration order fixed by each
/// company's first appearance in the rows.
#[derive(Debug, Clone)]
pub struct CompanyGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<Row>>,
}

impl CompanyGroups {
    pub fn build(dataset: &Dataset, config: &AnalysisConfig) -> Self {
        let mut order = Vec::new();
        let mut groups: HashMap<String, Vec<Row>> = HashMap::new();

        for row in &dataset.rows {
            let key = group_key(row, config);
            if !groups.contains_key(&key) {
                order.push(key.clone());
            }
            groups.entry(key).or_default().push(row.clone());
        }

        Self { order, groups }
    }

    /// Company keys in first-appearance order; feeds the dashboard's
    /// filter buttons.
    pub fn companies(&self) -> &[String] {
        &self.order
    }

    pub fn rows_for(&self, company: &str) -> Option<&[Row]> {
        self.groups.get(company).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Everything the group picker offers: the synthetic full-dataset
    /// selector first, then each company.
    pub fn selectors(&self) -> Vec<GroupSelector> {
        let mut selectors = vec![GroupSelector::AllCompanies];
        selectors.extend(
            self.order
                .iter()
                .map(|name| GroupSelector::Company(name.clone())),
        );
        selectors
    }
}

/// Group key for one row: first configured company column that is
/// present and non-null, stringified; otherwise the fallback label.
fn group_key(row: &Row, config: &AnalysisConfig) -> String {
    for column in &config.company_columns {
        if let Some(value) = row.get(column) {
            if !value.is_null() {
                return value.to_string();
            }
        }
    }
    config.fallback_group.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::panel::CellValue;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn company_row(company: Option<CellValue>, roa: f64) -> Row {
        let mut row = Row::new();
        if let Some(value) = company {
            row.insert("Company".to_string(), value);
        }
        row.insert("ROA".to_string(), CellValue::Number(roa));
        row
    }

    fn dataset(rows: Vec<Row>) -> Dataset {
        Dataset::new(
            "test.csv",
            vec!["Company".to_string(), "ROA".to_string()],
            rows,
        )
    }

    #[test]
    fn test_groups_by_company_in_first_appearance_order() {
        let data = dataset(vec![
            company_row(Some(text("Beta")), 1.0),
            company_row(Some(text("Alpha")), 2.0),
            company_row(Some(text("Beta")), 3.0),
        ]);
        let groups = CompanyGroups::build(&data, &AnalysisConfig::default());

        assert_eq!(groups.companies(), &["Beta", "Alpha"]);
        assert_eq!(groups.rows_for("Beta").unwrap().len(), 2);
        assert_eq!(groups.rows_for("Alpha").unwrap().len(), 1);
    }

    #[test]
    fn test_lowercase_company_column_is_second_choice() {
        let mut row = Row::new();
        row.insert("company".to_string(), text("lower-case inc"));
        let groups = CompanyGroups::build(&dataset(vec![row]), &AnalysisConfig::default());

        assert_eq!(groups.companies(), &["lower-case inc"]);
    }

    #[test]
    fn test_missing_and_null_company_fall_back_to_unknown() {
        let data = dataset(vec![
            company_row(None, 1.0),
            company_row(Some(CellValue::Null), 2.0),
        ]);
        let groups = CompanyGroups::build(&data, &AnalysisConfig::default());

        assert_eq!(groups.companies(), &["Unknown"]);
        assert_eq!(groups.rows_for("Unknown").unwrap().len(), 2);
    }

    #[test]
    fn test_numeric_company_codes_group_by_label() {
        let data = dataset(vec![company_row(Some(CellValue::Number(101.0)), 1.0)]);
        let groups = CompanyGroups::build(&data, &AnalysisConfig::default());

        assert_eq!(groups.companies(), &["101"]);
    }

    #[test]
    fn test_every_row_lands_in_exactly_one_group() {
        let data = dataset(vec![
            company_row(Some(text("A")), 1.0),
            company_row(Some(text("B")), 2.0),
            company_row(None, 3.0),
            company_row(Some(text("A")), 4.0),
        ]);
        let groups = CompanyGroups::build(&data, &AnalysisConfig::default());

        let total: usize = groups
            .companies()
            .iter()
            .map(|c| groups.rows_for(c).unwrap().len())
            .sum();
        assert_eq!(total, data.row_count());
    }

    #[test]
    fn test_selectors_offer_all_companies_first() {
        let data = dataset(vec![company_row(Some(text("A")), 1.0)]);
        let groups = CompanyGroups::build(&data, &AnalysisConfig::default());

        let selectors = groups.selectors();
        assert_eq!(selectors[0], GroupSelector::AllCompanies);
        assert_eq!(selectors[1], GroupSelector::Company("A".to_string()));
    }

    #[test]
    fn test_unknown_company_lookup_is_none() {
        let data = dataset(vec![company_row(Some(text("A")), 1.0)]);
        let groups = CompanyGroups::build(&data, &AnalysisConfig::default());

        assert!(groups.rows_for("Nope").is_none());
    }
}
