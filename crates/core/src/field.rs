//! Cell-level parsing shared by the row types of both datasets.
//!
//! Rows arrive as text cells (possibly blank); typed records are built from
//! them here so every dataset reports malformed input the same way.

use crate::error::{CalcError, CalcResult};

/// A raw cell as read from a source table. `None` means blank.
pub type Cell = Option<String>;

/// Parse a required numeric cell.
///
/// Blank cells, non-numeric text and non-finite values (`NaN`, `inf`) are all
/// rejected: none of them can take part in a sum or a regression.
pub fn number_cell(row: usize, column: &str, cell: Option<&str>) -> CalcResult<f64> {
    let raw = required(row, column, cell)?;

    let value: f64 = raw.parse().map_err(|_| {
        CalcError::data_format(Some(row), column, format!("expected a number, got `{raw}`"))
    })?;

    if !value.is_finite() {
        return Err(CalcError::data_format(
            Some(row),
            column,
            format!("expected a finite number, got `{raw}`"),
        ));
    }

    Ok(value)
}

/// Parse a required non-blank cell, returning it trimmed.
pub fn required<'a>(row: usize, column: &str, cell: Option<&'a str>) -> CalcResult<&'a str> {
    match cell.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CalcError::data_format(Some(row), column, "value is missing")),
    }
}

/// Free-text cell; blank becomes the empty string.
pub fn text_cell(cell: Option<&str>) -> String {
    cell.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(number_cell(1, "Stock_Used", Some("12")).unwrap(), 12.0);
        assert_eq!(number_cell(1, "Stock_Used", Some(" 3.25 ")).unwrap(), 3.25);
        assert_eq!(number_cell(1, "Stock_Used", Some("-4")).unwrap(), -4.0);
    }

    #[test]
    fn blank_cell_is_missing() {
        let err = number_cell(2, "Daily_Wage", Some("   ")).unwrap_err();
        assert_eq!(err, CalcError::data_format(Some(2), "Daily_Wage", "value is missing"));

        let err = number_cell(2, "Daily_Wage", None).unwrap_err();
        assert_eq!(err.code(), "data_format");
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        let err = number_cell(5, "Days_Worked", Some("twenty")).unwrap_err();
        assert!(err.to_string().contains("row 5"));
        assert!(err.to_string().contains("`twenty`"));

        assert!(number_cell(5, "Days_Worked", Some("NaN")).is_err());
        assert!(number_cell(5, "Days_Worked", Some("inf")).is_err());
    }

    #[test]
    fn text_cells_are_trimmed() {
        assert_eq!(text_cell(Some("  Ravi ")), "Ravi");
        assert_eq!(text_cell(None), "");
    }
}
