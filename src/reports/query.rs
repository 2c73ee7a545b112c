//! Expense list query: search, category filter and sort

use std::cmp::Ordering;

use crate::models::{Category, Expense};

/// Column to sort the expense list by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Amount,
    /// Alphabetical by category label
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filter and sort options for listing expenses
///
/// The default matches everything, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    /// Case-insensitive substring of the description or category label
    pub search: Option<String>,
    /// Only expenses in this category
    pub category: Option<Category>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl ExpenseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_by = field;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Check if an expense passes the search and category filters
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            if !expense.matches_search(search) {
                return false;
            }
        }

        true
    }

    /// Matching expenses in sorted order; the input is left untouched
    ///
    /// Sorting is stable, so equal keys keep their input order.
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let mut matched: Vec<Expense> = expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            match self.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        matched
    }

    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self.sort_by {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.cmp(&b.amount),
            SortField::Category => a.category.label().cmp(b.category.label()),
        }
    }
}

impl SortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Some(Self::Date),
            "amount" => Some(Self::Amount),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::fixtures::expense;

    fn sample() -> Vec<Expense> {
        vec![
            expense("a", 30, Category::Shopping, "2024-02-01"),
            expense("b", 10, Category::FoodAndDining, "2024-03-01"),
            expense("c", 20, Category::Education, "2024-01-01"),
            expense("d", 20, Category::Home, "2024-01-01"),
        ]
    }

    fn ids(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_default_is_newest_first() {
        let listed = ExpenseQuery::new().apply(&sample());
        assert_eq!(ids(&listed), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_sort_by_amount_ascending_is_stable() {
        let listed = ExpenseQuery::new()
            .sort_by(SortField::Amount)
            .order(SortOrder::Asc)
            .apply(&sample());
        assert_eq!(ids(&listed), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_sort_by_category_label() {
        let listed = ExpenseQuery::new()
            .sort_by(SortField::Category)
            .order(SortOrder::Asc)
            .apply(&sample());
        // Education, Food & Dining, Home, Shopping
        assert_eq!(ids(&listed), vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_search_matches_description_and_category() {
        let expenses = sample();

        let listed = ExpenseQuery::new().search("DINING").apply(&expenses);
        assert_eq!(ids(&listed), vec!["b"]);

        let listed = ExpenseQuery::new().search("home purchase").apply(&expenses);
        assert_eq!(ids(&listed), vec!["d"]);

        assert_eq!(ExpenseQuery::new().search("   ").apply(&expenses).len(), 4);
    }

    #[test]
    fn test_category_filter() {
        let listed = ExpenseQuery::new()
            .category(Category::Shopping)
            .apply(&sample());
        assert_eq!(ids(&listed), vec!["a"]);

        assert!(ExpenseQuery::new()
            .category(Category::Travel)
            .apply(&sample())
            .is_empty());
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!(SortField::parse("Amount"), Some(SortField::Amount));
        assert_eq!(SortField::parse("payee"), None);
    }
}
