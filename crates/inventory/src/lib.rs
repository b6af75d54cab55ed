//! Inventory usage forecasting.
//!
//! This crate turns an inventory history (one row per day of consumption)
//! into a next-day usage forecast and a stock runway estimate. It is pure,
//! deterministic logic: no IO, no HTTP, no storage.

pub mod forecast;
pub mod record;
pub mod trend;

pub use forecast::{ForecastResult, forecast, forecast_records};
pub use record::{DayIndex, InventoryRecord, InventoryRow, day_indices, parse_date};
pub use trend::LinearTrend;
