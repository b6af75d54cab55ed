//! Calculation error model.

use core::fmt;

use thiserror::Error;

/// Result type used across the calculators.
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculation-level error.
///
/// Every variant is terminal for the request that produced it: the
/// calculations are deterministic, so retrying reproduces the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A required column or cell is missing, a numeric cell is not a number,
    /// a date is unparseable, or the file itself is not a readable table.
    #[error("{0}")]
    DataFormat(DataFormatError),

    /// A ratio's denominator is zero (e.g. average daily usage).
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// The dataset has no rows where at least one is required.
    #[error("empty dataset: {0}")]
    EmptyDataset(String),
}

impl CalcError {
    pub fn data_format(
        row: Option<usize>,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::DataFormat(DataFormatError {
            row,
            column: column.into(),
            message: message.into(),
        })
    }

    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Self::DivisionByZero(msg.into())
    }

    pub fn empty_dataset(msg: impl Into<String>) -> Self {
        Self::EmptyDataset(msg.into())
    }

    /// Stable machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataFormat(_) => "data_format",
            Self::DivisionByZero(_) => "division_by_zero",
            Self::EmptyDataset(_) => "empty_dataset",
        }
    }
}

/// Where and why a dataset failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFormatError {
    /// 1-based data row (header excluded), when the problem is row-local.
    pub row: Option<usize>,
    /// Column name; empty when the problem is not column-specific.
    pub column: String,
    pub message: String,
}

impl fmt::Display for DataFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("data format error")?;
        match (self.row, self.column.is_empty()) {
            (Some(row), false) => write!(f, " in row {row}, column `{}`", self.column)?,
            (Some(row), true) => write!(f, " in row {row}")?,
            (None, false) => write!(f, " in column `{}`", self.column)?,
            (None, true) => {}
        }
        write!(f, ": {}", self.message)
    }
}
