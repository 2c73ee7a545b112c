//! Core data models for the expense tracker
//!
//! The expense record itself plus the value types it is built from.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{Category, CategoryParseError};
pub use expense::{parse_date, Expense, ExpenseDraft, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, YearMonth};
