//! Dashboard summary
//!
//! The headline figures shown above the charts: overall total, how many
//! expenses, how many categories saw spending, and the biggest category.

use crate::aggregation::{self, CategoryTotal};
use crate::models::{Expense, Money};

/// Headline statistics over a set of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Sum of all amounts
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Number of categories with non-zero spending
    pub active_categories: usize,
    /// Mean amount per expense
    pub average: Money,
    /// Highest-spending category, if any
    pub top_category: Option<CategoryTotal>,
}

impl DashboardSummary {
    pub fn generate(expenses: &[Expense]) -> Self {
        Self {
            total: aggregation::total(expenses),
            count: expenses.len(),
            active_categories: aggregation::chart_by_category(expenses).len(),
            average: aggregation::average(expenses),
            top_category: aggregation::highest_category(expenses),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
