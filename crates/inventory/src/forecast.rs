use serde::{Deserialize, Serialize};

use siteledger_core::{CalcError, CalcResult, mean, round_to};

use crate::record::{
    CURRENT_STOCK_COLUMN, DayIndex, InventoryRecord, InventoryRow, STOCK_USED_COLUMN, day_indices,
};
use crate::trend::LinearTrend;

/// Next-day usage forecast and stock runway for one inventory history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Usage projected for the day after the last observed day (2 dp).
    pub predicted_usage: f64,
    /// Current stock divided by average daily usage (1 dp).
    pub days_left: f64,

    /// Fitted usage trend over day index (unrounded).
    pub trend: LinearTrend,
    /// Mean `Stock_Used` across all rows (unrounded).
    pub average_daily_usage: f64,
    /// `Current_Stock` of the last row in file order.
    pub current_stock: f64,
    /// Day index the prediction was made for.
    pub next_day_index: DayIndex,
    pub sample_count: usize,
}

/// Forecast from raw rows.
///
/// Rows are validated in order; the first malformed cell aborts with a
/// `DataFormat` error naming its row and column.
pub fn forecast(rows: &[InventoryRow]) -> CalcResult<ForecastResult> {
    if rows.is_empty() {
        return Err(CalcError::empty_dataset(
            "inventory history needs at least one row",
        ));
    }

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| InventoryRecord::from_row(i + 1, row))
        .collect::<CalcResult<Vec<_>>>()?;

    forecast_records(&records)
}

/// Forecast from validated records.
///
/// Model:
/// - Day index = whole days since the earliest date.
/// - Least-squares line of `stock_used` over day index, evaluated one day past
///   the latest index.
/// - Runway = last row's `current_stock` / mean `stock_used`.
pub fn forecast_records(records: &[InventoryRecord]) -> CalcResult<ForecastResult> {
    let days = day_indices(records);
    let xs: Vec<f64> = days.iter().map(|d| d.as_f64()).collect();
    let ys: Vec<f64> = records.iter().map(|r| r.stock_used).collect();

    // `current_stock` follows file order, not date order.
    let (Some(last), Some(trend), Some(average_daily_usage)) =
        (records.last(), LinearTrend::fit(&xs, &ys), mean(&ys))
    else {
        return Err(CalcError::empty_dataset(
            "inventory history needs at least one row",
        ));
    };

    let next_day_index = days
        .iter()
        .copied()
        .max()
        .unwrap_or(DayIndex(0))
        .next();
    let predicted_usage = trend.predict(next_day_index.as_f64());

    ensure_finite(
        STOCK_USED_COLUMN,
        &[trend.slope, trend.intercept, predicted_usage, average_daily_usage],
    )?;

    if average_daily_usage == 0.0 {
        return Err(CalcError::division_by_zero(
            "average daily usage is zero; days of stock left is undefined",
        ));
    }

    let days_left = last.current_stock / average_daily_usage;
    ensure_finite(CURRENT_STOCK_COLUMN, &[days_left])?;

    Ok(ForecastResult {
        predicted_usage: round_to(predicted_usage, 2),
        days_left: round_to(days_left, 1),
        trend,
        average_daily_usage,
        current_stock: last.current_stock,
        next_day_index,
        sample_count: records.len(),
    })
}

/// Inputs that are individually finite can still overflow once summed.
fn ensure_finite(column: &str, values: &[f64]) -> CalcResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(CalcError::data_format(
            None,
            column,
            "values too large to forecast",
        ))
    }
}
