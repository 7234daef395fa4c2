//! Export module for FinSmart
//!
//! Serializes the ledger (full or filtered) for use outside the session:
//! - CSV: the canonical interchange format, read back on the next run
//! - JSON: machine-readable alternative

pub mod csv;
pub mod json;

pub use csv::{expenses_to_csv_string, read_expenses_csv, write_expenses_csv, CSV_HEADER};
pub use json::write_expenses_json;
