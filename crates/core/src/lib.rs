//! `siteledger-core` — shared building blocks for the calculators.
//!
//! This crate contains **pure** primitives (no IO): the error model every
//! calculation reports through, and the cell parsing/rounding helpers both
//! datasets share.

pub mod error;
pub mod field;
pub mod numeric;

pub use error::{CalcError, CalcResult, DataFormatError};
pub use field::{Cell, number_cell, required, text_cell};
pub use numeric::{mean, round_to};
