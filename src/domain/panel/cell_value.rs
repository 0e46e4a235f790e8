// ============================================================
// CELL VALUE
// ============================================================
// One parsed spreadsheet cell: a number, a string, or null

use serde::{Deserialize, Serialize};

/// A single cell value as produced by spreadsheet parsing.
/// Serialized untagged so the JSON side sees a bare number,
/// string, or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Strict type test used by column detection: only the `Number`
    /// variant counts, numeric-looking text does not.
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric coercion used by the calculators: finite numbers pass
    /// through, text is trim-parsed, everything else is discarded.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Number(_) => None,
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            CellValue::Null => None,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Integral floats render without the trailing ".0" so a
            // numeric company code or year reads like the sheet showed it
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{:.0}", n)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number_coercion() {
        assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::Text("3.5".to_string()).as_number(), Some(3.5));
        assert_eq!(CellValue::Text(" 42 ".to_string()).as_number(), Some(42.0));
        assert_eq!(CellValue::Text("abc".to_string()).as_number(), None);
        assert_eq!(CellValue::Text("".to_string()).as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
        assert_eq!(CellValue::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn test_is_number_is_strict() {
        assert!(CellValue::Number(1.0).is_number());
        assert!(!CellValue::Text("1.0".to_string()).is_number());
        assert!(!CellValue::Null.is_number());
    }

    #[test]
    fn test_untagged_json_shape() {
        assert_eq!(
            serde_json::to_string(&CellValue::Number(1.5)).unwrap(),
            "1.5"
        );
        assert_eq!(
            serde_json::to_string(&CellValue::Text("ABC".to_string())).unwrap(),
            "\"ABC\""
        );
        assert_eq!(serde_json::to_string(&CellValue::Null).unwrap(), "null");

        let parsed: CellValue = serde_json::from_str("12.25").unwrap();
        assert_eq!(parsed, CellValue::Number(12.25));
        let parsed: CellValue = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, CellValue::Null);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(CellValue::Number(2015.0).to_string(), "2015");
        assert_eq!(CellValue::Number(3.75).to_string(), "3.75");
        assert_eq!(CellValue::Text("PT Astra".to_string()).to_string(), "PT Astra");
        assert_eq!(CellValue::Null.to_string(), "");
    }
}
