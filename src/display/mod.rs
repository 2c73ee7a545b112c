//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and their aggregates for
//! terminal display.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_table};
pub use summary::{format_category_totals, format_monthly_totals, format_summary};
