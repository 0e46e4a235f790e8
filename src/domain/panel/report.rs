// ============================================================
// ANALYSIS REPORT TYPES
// ============================================================
// Serializable results the presentation layer renders directly:
// per-column summaries, the correlation matrix, trend series

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSummary {
    pub column: String,
    /// Count of rows with a usable numeric value
    pub n: usize,
    pub mean: f64,
    /// Population standard deviation (divisor N)
    pub sd: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// All-zero sentinel for a column with no usable values. The
    /// dashboard renders it like any other record instead of erroring.
    pub fn empty(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            n: 0,
            mean: 0.0,
            sd: 0.0,
            min: 0.0,
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
            max: 0.0,
        }
    }
}

/// Full pairwise Pearson matrix over the detected numeric columns,
/// keyed by column name both ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationMatrix {
    /// Column order the matrix was built in
    pub columns: Vec<String>,
    pub values: HashMap<String, HashMap<String, f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, x: &str, y: &str) -> Option<f64> {
        self.values.get(x).and_then(|row| row.get(y)).copied()
    }
}

/// One point of a per-column trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

/// Chart-ready series for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub column: String,
    pub points: Vec<TrendPoint>,
}

/// Everything one selection renders: resolved group, the numeric
/// columns found in it, and the result blocks its toggles asked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub group: String,
    pub row_count: usize,
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<ColumnSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<Vec<TrendSeries>>,
}
