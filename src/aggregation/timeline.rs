//! Date-based views: monthly series and range filtering

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Expense, Money, YearMonth};

/// Spending within one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: Money,
}

/// Totals per calendar month, oldest first
///
/// Only months that contain at least one expense appear.
pub fn by_month(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<YearMonth, Money> = BTreeMap::new();
    for expense in expenses {
        *months.entry(YearMonth::of(expense.date)).or_default() += expense.amount;
    }

    months
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Expenses dated within `start..=end`, in input order
///
/// An inverted range (`start > end`) matches nothing.
pub fn filter_by_date_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}
