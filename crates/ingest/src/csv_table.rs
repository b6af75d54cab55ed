use serde::de::DeserializeOwned;

use siteledger_core::{CalcError, CalcResult};
use siteledger_inventory::InventoryRow;
use siteledger_labour::LabourRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse an inventory table (`Date`, `Stock_Used`, `Current_Stock`).
pub fn read_inventory_csv(bytes: &[u8]) -> CalcResult<Vec<InventoryRow>> {
    read_rows(bytes, &siteledger_inventory::record::COLUMNS)
}

/// Parse a labour table (`Name`, `Profession`, `Days_Worked`, `Daily_Wage`).
pub fn read_labour_csv(bytes: &[u8]) -> CalcResult<Vec<LabourRow>> {
    read_rows(bytes, &siteledger_labour::record::COLUMNS)
}

/// Parse a headed CSV table into rows of `T`.
///
/// Every name in `required` must appear in the header (surrounding
/// whitespace ignored). Column order is free and extra columns are ignored.
pub fn read_rows<T: DeserializeOwned>(bytes: &[u8], required: &[&str]) -> CalcResult<Vec<T>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(CalcError::data_format(
                None,
                *column,
                "column is missing from the header",
            ));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.map_err(csv_error)?;
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "csv table parsed");
    Ok(rows)
}

fn csv_error(err: csv::Error) -> CalcError {
    // Record 0 is the header, so the record index is already the 1-based data row.
    let row = err
        .position()
        .map(|p| p.record() as usize)
        .filter(|r| *r > 0);

    let message = match err.kind() {
        csv::ErrorKind::Utf8 { .. } => "file is not valid UTF-8 text".to_string(),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields, found {len}"),
        _ => err.to_string(),
    };

    CalcError::data_format(row, "", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteledger_inventory::forecast;
    use siteledger_labour::calculate_wages;

    #[test]
    fn reads_inventory_rows() {
        let csv = "Date,Stock_Used,Current_Stock\n2024-01-01,10,100\n2024-01-02,20,90\n";
        let rows = read_inventory_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], InventoryRow::new("2024-01-02", "20", "90"));

        let result = forecast(&rows).unwrap();
        assert_eq!(result.predicted_usage, 30.0);
        assert_eq!(result.days_left, 6.0);
    }

    #[test]
    fn column_order_whitespace_and_extras_are_tolerated() {
        let csv = "\u{feff} Current_Stock , Notes,Stock_Used,Date\n100, first ,10,2024-01-01\n";
        let rows = read_inventory_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows, vec![InventoryRow::new("2024-01-01", "10", "100")]);
    }

    #[test]
    fn blank_cells_become_missing_values() {
        let csv = "Name,Profession,Days_Worked,Daily_Wage\nAsha,,20,\n";
        let rows = read_labour_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].profession, None);
        assert_eq!(rows[0].daily_wage, None);

        let err = calculate_wages(&rows).unwrap_err();
        assert_eq!(
            err,
            CalcError::data_format(Some(1), "Daily_Wage", "value is missing")
        );
    }

    #[test]
    fn missing_column_is_a_format_error() {
        let csv = "Name,Profession,Days_Worked\nAsha,Mason,20\n";
        let err = read_labour_csv(csv.as_bytes()).unwrap_err();

        assert_eq!(
            err,
            CalcError::data_format(None, "Daily_Wage", "column is missing from the header")
        );
    }

    #[test]
    fn ragged_record_names_its_row() {
        let csv = "Date,Stock_Used,Current_Stock\n2024-01-01,10,100\n2024-01-02,20\n";
        match read_inventory_csv(csv.as_bytes()).unwrap_err() {
            CalcError::DataFormat(e) => {
                assert_eq!(e.row, Some(2));
                assert_eq!(e.message, "expected 3 fields, found 2");
            }
            other => panic!("expected data format error, got {other:?}"),
        }
    }

    #[test]
    fn non_utf8_content_is_rejected() {
        let mut bytes = b"Name,Profession,Days_Worked,Daily_Wage\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe,Mason,1,2\n");

        let err = read_labour_csv(&bytes).unwrap_err();
        assert_eq!(err.code(), "data_format");
    }

    #[test]
    fn header_only_table_has_no_rows() {
        let rows = read_labour_csv(b"Name,Profession,Days_Worked,Daily_Wage\n").unwrap();
        assert!(rows.is_empty());
        assert_eq!(calculate_wages(&rows).unwrap().total_labour_cost, 0.0);

        let rows = read_inventory_csv(b"Date,Stock_Used,Current_Stock\n").unwrap();
        assert!(matches!(forecast(&rows), Err(CalcError::EmptyDataset(_))));
    }

    #[test]
    fn empty_file_is_missing_every_column() {
        let err = read_inventory_csv(b"").unwrap_err();
        assert!(err.to_string().contains("Date"));
    }
}
