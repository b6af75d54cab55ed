use serde::{Deserialize, Serialize};

use siteledger_core::{CalcResult, Cell, number_cell, text_cell};

pub const NAME_COLUMN: &str = "Name";
pub const PROFESSION_COLUMN: &str = "Profession";
pub const DAYS_WORKED_COLUMN: &str = "Days_Worked";
pub const DAILY_WAGE_COLUMN: &str = "Daily_Wage";

/// Required header columns of a labour table.
pub const COLUMNS: [&str; 4] = [
    NAME_COLUMN,
    PROFESSION_COLUMN,
    DAYS_WORKED_COLUMN,
    DAILY_WAGE_COLUMN,
];

/// One raw row of the labour table, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabourRow {
    #[serde(rename = "Name")]
    pub name: Cell,
    #[serde(rename = "Profession")]
    pub profession: Cell,
    #[serde(rename = "Days_Worked")]
    pub days_worked: Cell,
    #[serde(rename = "Daily_Wage")]
    pub daily_wage: Cell,
}

impl LabourRow {
    pub fn new(name: &str, profession: &str, days_worked: &str, daily_wage: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            profession: Some(profession.to_string()),
            days_worked: Some(days_worked.to_string()),
            daily_wage: Some(daily_wage.to_string()),
        }
    }
}

/// A validated labour record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabourRecord {
    pub name: String,
    pub profession: String,
    pub days_worked: f64,
    pub daily_wage: f64,
}

impl LabourRecord {
    /// Validate a raw row. `row` is the 1-based data row number used in errors.
    ///
    /// Name and profession are free text and may be blank; the two numeric
    /// cells are required.
    pub fn from_row(row: usize, raw: &LabourRow) -> CalcResult<Self> {
        Ok(Self {
            name: text_cell(raw.name.as_deref()),
            profession: text_cell(raw.profession.as_deref()),
            days_worked: number_cell(row, DAYS_WORKED_COLUMN, raw.days_worked.as_deref())?,
            daily_wage: number_cell(row, DAILY_WAGE_COLUMN, raw.daily_wage.as_deref())?,
        })
    }

    /// Days worked times daily wage, unrounded.
    pub fn monthly_wage(&self) -> f64 {
        self.days_worked * self.daily_wage
    }
}
