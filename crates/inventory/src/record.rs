use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use siteledger_core::{CalcError, CalcResult, Cell, number_cell, required};

pub const DATE_COLUMN: &str = "Date";
pub const STOCK_USED_COLUMN: &str = "Stock_Used";
pub const CURRENT_STOCK_COLUMN: &str = "Current_Stock";

/// Required header columns of an inventory table.
pub const COLUMNS: [&str; 3] = [DATE_COLUMN, STOCK_USED_COLUMN, CURRENT_STOCK_COLUMN];

/// One raw row of the inventory table, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    #[serde(rename = "Date")]
    pub date: Cell,
    #[serde(rename = "Stock_Used")]
    pub stock_used: Cell,
    #[serde(rename = "Current_Stock")]
    pub current_stock: Cell,
}

impl InventoryRow {
    pub fn new(date: &str, stock_used: &str, current_stock: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            stock_used: Some(stock_used.to_string()),
            current_stock: Some(current_stock.to_string()),
        }
    }
}

/// One validated day of inventory history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub date: NaiveDateTime,
    pub stock_used: f64,
    pub current_stock: f64,
}

impl InventoryRecord {
    /// Validate a raw row. `row` is the 1-based data row number used in errors.
    pub fn from_row(row: usize, raw: &InventoryRow) -> CalcResult<Self> {
        let date = required(row, DATE_COLUMN, raw.date.as_deref())?;
        let date = parse_date(date).ok_or_else(|| {
            CalcError::data_format(Some(row), DATE_COLUMN, format!("unrecognised date `{date}`"))
        })?;

        Ok(Self {
            date,
            stock_used: number_cell(row, STOCK_USED_COLUMN, raw.stock_used.as_deref())?,
            current_stock: number_cell(row, CURRENT_STOCK_COLUMN, raw.current_stock.as_deref())?,
        })
    }
}

/// Whole days elapsed since the earliest date of the dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayIndex(pub i64);

impl DayIndex {
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Day index of every record, in record order.
///
/// Elapsed time is floored to whole days, so a time-of-day component never
/// yields a fractional index. Returns an empty vector for no records.
pub fn day_indices(records: &[InventoryRecord]) -> Vec<DayIndex> {
    let Some(min) = records.iter().map(|r| r.date).min() else {
        return Vec::new();
    };

    records
        .iter()
        .map(|r| DayIndex((r.date - min).num_days()))
        .collect()
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%d %b %Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a calendar date (optionally with a time of day).
///
/// Offsets in RFC 3339 timestamps are normalised to UTC.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
