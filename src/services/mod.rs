//! Service layer for the expense tracker
//!
//! The service layer owns the canonical expense collection and applies
//! validation, persistence and audit logging around every mutation.

pub mod expense;

pub use expense::{ExpenseStore, LoadOutcome};
