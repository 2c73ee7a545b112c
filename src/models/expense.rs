//! Expense model
//!
//! An expense is the only entity the tracker stores. `ExpenseDraft` carries the
//! editable fields and is what create and update accept; the id is assigned
//! once by the store and never changes afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Earliest date accepted on input (1900-01-01)
pub fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A single recorded expense
///
/// Field order and names match the stored JSON blob exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub category: Category,
    pub description: String,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense from a draft with a freshly generated id
    pub fn new(draft: ExpenseDraft) -> Self {
        Self::with_id(ExpenseId::new(), draft)
    }

    /// Create an expense from a draft with a given id
    pub fn with_id(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, draft: ExpenseDraft) {
        self.amount = draft.amount;
        self.category = draft.category;
        self.description = draft.description;
        self.date = draft.date;
    }

    /// The editable fields of this expense
    pub fn draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            amount: self.amount,
            category: self.category,
            description: self.description.clone(),
            date: self.date,
        }
    }

    /// Case-insensitive search over description and category label
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.description.to_lowercase().contains(&query)
            || self.category.label_contains(&query)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description,
            self.category
        )
    }
}

/// The user-editable fields of an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    /// Build a draft from raw user-entered strings
    ///
    /// Checks field syntax only; call [`ExpenseDraft::validate`] for the value rules.
    pub fn parse(
        amount: &str,
        category: &str,
        description: &str,
        date: &str,
    ) -> Result<Self, ExpenseValidationError> {
        let amount = Money::parse(amount)
            .map_err(|_| ExpenseValidationError::InvalidAmount(amount.trim().to_string()))?;
        let category = Category::parse(category)
            .map_err(|e| ExpenseValidationError::InvalidCategory(e.to_string()))?;
        let date = parse_date(date)?;

        Ok(Self {
            amount,
            category,
            description: description.to_string(),
            date,
        })
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.date < min_date() {
            return Err(ExpenseValidationError::DateTooEarly(self.date));
        }

        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, ExpenseValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ExpenseValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ExpenseValidationError::InvalidDate(s.to_string()))
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    InvalidAmount(String),
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    InvalidCategory(String),
    EmptyDescription,
    MissingDate,
    InvalidDate(String),
    DateTooEarly(NaiveDate),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(s) => write!(f, "Amount must be a valid number: {}", s),
            Self::NonPositiveAmount(m) => write!(f, "Amount must be greater than 0 (got {})", m),
            Self::AmountTooLarge(m) => {
                write!(f, "Amount {} exceeds the maximum of {}", m, Money::MAX)
            }
            Self::InvalidCategory(msg) => write!(f, "{}", msg),
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::MissingDate => write!(f, "Please select a date"),
            Self::InvalidDate(s) => write!(f, "Invalid date '{}' (expected YYYY-MM-DD)", s),
            Self::DateTooEarly(d) => write!(f, "Date {} is before 1900-01-01", d),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
