//! File ingestion: uploaded tables -> raw rows for the calculators.
//!
//! Only CSV is supported. Rows come out as text cells; typing and validation
//! stay with the calculators so malformed values are reported the same way
//! no matter where the rows came from.

pub mod csv_table;

pub use csv_table::{read_inventory_csv, read_labour_csv, read_rows};
