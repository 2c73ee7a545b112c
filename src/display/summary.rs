//! Aggregate display formatting
//!
//! Text renderings of the dashboard figures, category breakdown and monthly
//! series. Bars are scaled to the largest value shown.

use crate::aggregation::{CategoryShare, CategoryTotal, MonthlyTotal};
use crate::models::Money;
use crate::reports::DashboardSummary;

const BAR_WIDTH: usize = 30;

/// Format the dashboard summary
pub fn format_summary(summary: &DashboardSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Total Spending:   {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Transactions:     {}\n", summary.count));
    output.push_str(&format!("Categories:       {}\n", summary.active_categories));
    output.push_str(&format!(
        "Average:          {}\n",
        summary.average.format_with_symbol(symbol)
    ));

    match summary.top_category {
        Some(top) => output.push_str(&format!(
            "Top Category:     {} ({})\n",
            top.category,
            top.total.format_with_symbol(symbol)
        )),
        None => output.push_str("Top Category:     -\n"),
    }

    output
}

/// Format category totals with their share of the total
///
/// Rows follow the order of `totals`; shares are looked up by category.
pub fn format_category_totals(
    totals: &[CategoryTotal],
    shares: &[CategoryShare],
    symbol: &str,
) -> String {
    if totals.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let max = totals.iter().map(|t| t.total).max().unwrap_or_default();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>6} {:>7}\n",
        "Category", "Amount", "Count", "%"
    ));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for total in totals {
        let percentage = shares
            .iter()
            .find(|s| s.category == total.category)
            .map(|s| s.percentage)
            .unwrap_or(0.0);

        output.push_str(&format!(
            "{:<20} {:>12} {:>6} {:>6.1}%  {}\n",
            total.category.label(),
            total.total.format_with_symbol(symbol),
            total.count,
            percentage,
            bar(total.total, max)
        ));
    }

    output
}

/// Format the monthly spending series, oldest first
pub fn format_monthly_totals(months: &[MonthlyTotal], symbol: &str) -> String {
    if months.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let max = months.iter().map(|m| m.total).max().unwrap_or_default();

    let mut output = String::new();
    for month in months {
        output.push_str(&format!(
            "{:<10} {:>12}  {}\n",
            month.month.label(),
            month.total.format_with_symbol(symbol),
            bar(month.total, max)
        ));
    }

    output
}

fn bar(value: Money, max: Money) -> String {
    if !max.is_positive() || !value.is_positive() {
        return String::new();
    }
    let filled = (value.cents() as f64 / max.cents() as f64 * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{self, fixtures::three_expenses};
    use crate::models::Category;

    #[test]
    fn test_format_summary() {
        let summary = DashboardSummary::generate(&three_expenses());
        let output = format_summary(&summary, "$");

        assert!(output.contains("Total Spending:   $100.00"));
        assert!(output.contains("Transactions:     3"));
        assert!(output.contains("Top Category:     Food & Dining ($80.00)"));
    }

    #[test]
    fn test_format_empty_summary() {
        let output = format_summary(&DashboardSummary::generate(&[]), "$");
        assert!(output.contains("Top Category:     -"));
    }

    #[test]
    fn test_format_category_totals() {
        let expenses = three_expenses();
        let output = format_category_totals(
            &aggregation::chart_by_category(&expenses),
            &aggregation::percentage_breakdown(&expenses),
            "$",
        );

        assert!(output.contains("Food & Dining"));
        assert!(output.contains("80.0%"));
        assert!(output.contains(&"#".repeat(BAR_WIDTH)));
        assert!(!output.contains("Travel"));
    }

    #[test]
    fn test_zero_rows_have_no_bar() {
        let totals = aggregation::by_category(&three_expenses(), &[Category::Travel]);
        let output = format_category_totals(&totals, &[], "$");
        assert!(output.contains("Travel"));
        assert!(output.trim_end().ends_with("0.0%"));
    }

    #[test]
    fn test_format_monthly_totals() {
        let output = format_monthly_totals(&aggregation::by_month(&three_expenses()), "$");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Jan 2024"));
        assert!(lines[1].starts_with("Feb 2024"));
    }
}
