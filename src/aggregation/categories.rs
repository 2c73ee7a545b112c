//! Category totals, rankings and percentage shares

use crate::models::{Category, Expense, Money};

/// Spending in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
}

/// A category's share of overall spending
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Percent of the overall total, in `(0, 100]`
    pub percentage: f64,
}

/// Sum of every amount; zero for an empty slice
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Mean amount per expense; zero for an empty slice
pub fn average(expenses: &[Expense]) -> Money {
    total(expenses).average_over(expenses.len())
}

/// Totals for each of `categories`, in the order given, zeros included
///
/// Expenses whose category is not listed are ignored, so the totals sum to
/// [`total`] whenever `categories` covers every category present.
pub fn by_category(expenses: &[Expense], categories: &[Category]) -> Vec<CategoryTotal> {
    categories
        .iter()
        .map(|&category| {
            let (total, count) = expenses
                .iter()
                .filter(|e| e.category == category)
                .fold((Money::zero(), 0), |(sum, n), e| (sum + e.amount, n + 1));
            CategoryTotal {
                category,
                total,
                count,
            }
        })
        .collect()
}

/// Non-zero category totals over every category, for charts
pub fn chart_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    by_category(expenses, &Category::ALL)
        .into_iter()
        .filter(|t| !t.total.is_zero())
        .collect()
}

/// The `n` highest-spending categories, largest first
///
/// Equal totals keep enumeration order. Categories with no spending are never
/// ranked.
pub fn top_categories(expenses: &[Expense], n: usize) -> Vec<CategoryTotal> {
    let mut totals = chart_by_category(expenses);
    // sort_by is stable, so ties stay in enumeration order
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(n);
    totals
}

/// The single highest-spending category, if anything was spent
pub fn highest_category(expenses: &[Expense]) -> Option<CategoryTotal> {
    top_categories(expenses, 1).into_iter().next()
}

/// Each spending category's percentage of the overall total
///
/// Empty when the total is zero.
pub fn percentage_breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
    let overall = total(expenses);

    chart_by_category(expenses)
        .into_iter()
        .filter_map(|t| {
            t.total.percentage_of(overall).map(|percentage| CategoryShare {
                category: t.category,
                total: t.total,
                percentage,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::fixtures::{expense, three_expenses};

    #[test]
    fn test_total() {
        assert_eq!(total(&three_expenses()), Money::from_units(100));
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_total_is_exact_in_cents() {
        let mut expenses = three_expenses();
        for e in &mut expenses {
            e.amount = Money::from_cents(10);
        }
        // 0.1 + 0.1 + 0.1 must not drift
        assert_eq!(total(&expenses), Money::from_cents(30));
    }

    #[test]
    fn test_by_category_full_mapping() {
        let totals = by_category(&three_expenses(), &Category::ALL);

        assert_eq!(totals.len(), Category::ALL.len());
        assert_eq!(totals[0].category, Category::FoodAndDining);
        assert_eq!(totals[0].total, Money::from_units(80));
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].category, Category::Transportation);
        assert_eq!(totals[1].total, Money::from_units(20));
        assert!(totals[2..].iter().all(|t| t.total.is_zero() && t.count == 0));
    }

    #[test]
    fn test_by_category_conserves_total() {
        let expenses = vec![
            expense("a", 12, Category::Home, "2024-01-01"),
            expense("b", 7, Category::Other, "2024-01-02"),
            expense("c", 3, Category::Home, "2024-01-03"),
            expense("d", 40, Category::Travel, "2024-01-04"),
        ];
        let sum: Money = by_category(&expenses, &Category::ALL)
            .iter()
            .map(|t| t.total)
            .sum();
        assert_eq!(sum, total(&expenses));
    }

    #[test]
    fn test_chart_by_category_omits_zeros() {
        let chart = chart_by_category(&three_expenses());
        let categories: Vec<Category> = chart.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![Category::FoodAndDining, Category::Transportation]
        );
        assert!(chart_by_category(&[]).is_empty());
    }

    #[test]
    fn test_top_categories_orders_by_amount() {
        let expenses = vec![
            expense("a", 10, Category::FoodAndDining, "2024-01-01"),
            expense("b", 90, Category::Home, "2024-01-02"),
            expense("c", 40, Category::Travel, "2024-01-03"),
        ];

        let top = top_categories(&expenses, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, Category::Home);
        assert_eq!(top[1].category, Category::Travel);
    }

    #[test]
    fn test_top_categories_ties_keep_enumeration_order() {
        let expenses = vec![
            expense("a", 25, Category::Home, "2024-01-01"),
            expense("b", 25, Category::Entertainment, "2024-01-02"),
            expense("c", 25, Category::Shopping, "2024-01-03"),
        ];

        let ranked: Vec<Category> = top_categories(&expenses, 10)
            .iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(
            ranked,
            vec![Category::Entertainment, Category::Shopping, Category::Home]
        );
    }

    #[test]
    fn test_highest_category() {
        let top = highest_category(&three_expenses()).unwrap();
        assert_eq!(top.category, Category::FoodAndDining);
        assert!(highest_category(&[]).is_none());
    }

    #[test]
    fn test_average() {
        let expenses = vec![
            expense("a", 10, Category::Home, "2024-01-01"),
            expense("b", 10, Category::Home, "2024-01-01"),
            expense("c", 5, Category::Home, "2024-01-01"),
        ];
        assert_eq!(average(&expenses), Money::from_cents(833));
        assert_eq!(average(&[]), Money::zero());
    }

    #[test]
    fn test_percentage_breakdown_sums_to_100() {
        let expenses = vec![
            expense("a", 1, Category::Home, "2024-01-01"),
            expense("b", 1, Category::Travel, "2024-01-01"),
            expense("c", 1, Category::Other, "2024-01-01"),
        ];

        let shares = percentage_breakdown(&expenses);
        assert_eq!(shares.len(), 3);
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!(shares.iter().all(|s| s.percentage.is_finite()));
    }

    #[test]
    fn test_percentage_breakdown_scenario() {
        let shares = percentage_breakdown(&three_expenses());
        assert_eq!(shares[0].category, Category::FoodAndDining);
        assert!((shares[0].percentage - 80.0).abs() < 1e-9);
        assert!((shares[1].percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_breakdown_empty_total() {
        assert!(percentage_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let expenses = three_expenses();
        let before = expenses.clone();
        let _ = top_categories(&expenses, 3);
        let _ = percentage_breakdown(&expenses);
        assert_eq!(expenses, before);
    }
}
