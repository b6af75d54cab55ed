//! Labour wage calculation.
//!
//! Pure domain logic: turns labour records (days worked, daily rate) into
//! per-worker monthly wages and a total labour cost.

pub mod record;
pub mod wages;

pub use record::{LabourRecord, LabourRow};
pub use wages::{WageLine, WageResult, calculate_wages};
