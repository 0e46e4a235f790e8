// ============================================================
// ROW
// ============================================================
// One spreadsheet record as a field-name-to-value mapping.
// Absent keys model cells the record never had.

use super::cell_value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A normalized spreadsheet row. Immutable once produced by
/// normalization; serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: HashMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, CellValue)>) -> Self {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, key: String, value: CellValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.values.get(key)
    }

    /// Coerced numeric lookup; `None` for absent, null, and
    /// non-numeric cells alike.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(CellValue::as_number)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
