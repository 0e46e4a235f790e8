// ============================================================
// CELL VALUE PARSER
// ============================================================
// Types a raw text cell. Everything a CSV gives us is text; this is
// where numeric cells become numbers and blanks become null.

use crate::domain::panel::CellValue;
use once_cell::sync::Lazy;
use regex::Regex;

// Thousands-grouped numbers ("1,234" / "-12,345.67") don't pass a
// plain float parse, so they get their own pattern before the commas
// are stripped.
static GROUPED_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(,\d{3})+(\.\d+)?$").unwrap());

/// Parse one raw text cell into a typed value.
pub fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return CellValue::Number(n);
        }
    }

    if GROUPED_NUMBER_PATTERN.is_match(trimmed) {
        if let Ok(n) = trimmed.replace(',', "").parse::<f64>() {
            return CellValue::Number(n);
        }
    }

    CellValue::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_cell("42"), CellValue::Number(42.0));
        assert_eq!(parse_cell("-3.75"), CellValue::Number(-3.75));
        assert_eq!(parse_cell(" 0.5 "), CellValue::Number(0.5));
        assert_eq!(parse_cell("1e3"), CellValue::Number(1000.0));
    }

    #[test]
    fn test_grouped_numbers() {
        assert_eq!(parse_cell("1,000"), CellValue::Number(1000.0));
        assert_eq!(parse_cell("-12,345.67"), CellValue::Number(-12345.67));
    }

    #[test]
    fn test_blank_is_null() {
        assert_eq!(parse_cell(""), CellValue::Null);
        assert_eq!(parse_cell("   "), CellValue::Null);
    }

    #[test]
    fn test_text_stays_text() {
        assert_eq!(
            parse_cell("PT Telkom"),
            CellValue::Text("PT Telkom".to_string())
        );
        // Textual missing markers stay text so grouping still sees them
        assert_eq!(parse_cell("N/A"), CellValue::Text("N/A".to_string()));
        // Misgrouped digits are not numbers
        assert_eq!(parse_cell("1,23"), CellValue::Text("1,23".to_string()));
    }

    #[test]
    fn test_non_finite_tokens_stay_text() {
        assert_eq!(parse_cell("NaN"), CellValue::Text("NaN".to_string()));
        assert_eq!(parse_cell("inf"), CellValue::Text("inf".to_string()));
    }
}
