//! Export module for the expense tracker
//!
//! Expense rows and time-ranged reports export to spreadsheet-compatible CSV.

pub mod csv;

pub use self::csv::{export_report, report_filename, to_csv, write_csv, CSV_HEADER};
