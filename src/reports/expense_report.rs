//! Expense Report
//!
//! Spending analysis by category for a chosen time range, plus the matching
//! expense rows for CSV export.

use chrono::NaiveDate;
use std::io::Write;

use super::range::{DateRange, ReportRange};
use crate::aggregation;
use crate::error::ExpenseResult;
use crate::export;
use crate::models::{Category, Expense, Money};

/// One category's line in the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCategoryRow {
    pub category: Category,
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Percentage of the report total
    pub percentage: f64,
}

/// Expense report over a date range
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// Resolved bounds and label of the range
    pub range: DateRange,
    /// Expenses within the range, in collection order
    pub expenses: Vec<Expense>,
    pub total: Money,
    pub count: usize,
    pub average: Money,
    /// Categories with spending, largest first
    pub breakdown: Vec<ReportCategoryRow>,
}

impl ExpenseReport {
    /// Generate the report for `range` resolved against `today`
    pub fn generate(expenses: &[Expense], range: ReportRange, today: NaiveDate) -> Self {
        Self::for_dates(expenses, range.resolve(today))
    }

    /// Generate the report for already-resolved bounds
    pub fn for_dates(expenses: &[Expense], range: DateRange) -> Self {
        let subset = aggregation::filter_by_date_range(expenses, range.start, range.end);
        let total = aggregation::total(&subset);

        let breakdown = aggregation::top_categories(&subset, Category::ALL.len())
            .into_iter()
            .map(|t| ReportCategoryRow {
                category: t.category,
                total: t.total,
                count: t.count,
                percentage: t.total.percentage_of(total).unwrap_or(0.0),
            })
            .collect();

        Self {
            range,
            count: subset.len(),
            average: aggregation::average(&subset),
            total,
            expenses: subset,
            breakdown,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Highest-spending category in the range
    pub fn top_category(&self) -> Option<&ReportCategoryRow> {
        self.breakdown.first()
    }

    /// File name used when exporting this report
    pub fn filename(&self) -> String {
        export::report_filename(self.range.start, self.range.end)
    }

    /// Write the report's expense rows as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        export::write_csv(&self.expenses, writer)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Report: {} ({} to {})\n",
            self.range.label, self.range.start, self.range.end
        ));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!("Total Spending: {}\n", self.total));
        output.push_str(&format!("Expenses:       {}\n", self.count));
        output.push_str(&format!("Average:        {}\n", self.average));

        if self.breakdown.is_empty() {
            output.push_str("\nNo expenses in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "\n{:<24} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.breakdown {
            output.push_str(&format!(
                "{:<24} {:>12} {:>8} {:>7.1}%\n",
                row.category.label(),
                row.total.to_string(),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>8}\n",
            "TOTAL",
            self.total.to_string(),
            self.count
        ));

        output
    }
}
