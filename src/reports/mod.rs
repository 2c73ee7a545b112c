//! Reports for the expense tracker
//!
//! Provides the dashboard summary, time-ranged expense reports and the
//! searchable, sortable expense list.

pub mod expense_report;
pub mod query;
pub mod range;
pub mod summary;

pub use expense_report::{ExpenseReport, ReportCategoryRow};
pub use query::{ExpenseQuery, SortField, SortOrder};
pub use range::{DateRange, ReportRange};
pub use summary::DashboardSummary;
