//! CLI commands for reports
//!
//! Provides the dashboard summary, category and monthly breakdowns, and
//! time-ranged expense reports with CSV export.

use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

use crate::aggregation;
use crate::config::{ExpensePaths, Settings};
use crate::display::{format_category_totals, format_monthly_totals, format_summary};
use crate::error::ExpenseResult;
use crate::export;
use crate::models::Category;
use crate::reports::{DashboardSummary, ExpenseReport, ReportRange};
use crate::services::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show headline spending figures
    Summary,

    /// Show spending by category
    Categories {
        /// Include categories with no spending
        #[arg(short, long)]
        all: bool,
    },

    /// Show spending per month
    Monthly,

    /// Generate a spending report for a time range
    Report {
        /// last7days, last30days, last3months, last6months, thismonth or YYYY-MM
        #[arg(short, long, default_value = "last30days")]
        range: String,

        /// Export the report rows to CSV
        #[arg(short, long)]
        export: bool,

        /// Directory for the exported CSV (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &ExpenseStore,
    paths: &ExpensePaths,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let expenses = store.all();

    match cmd {
        ReportCommands::Summary => {
            let summary = DashboardSummary::generate(expenses);
            print!("{}", format_summary(&summary, symbol));

            let top = aggregation::top_categories(expenses, settings.chart_top_categories);
            if !top.is_empty() {
                println!();
                println!("Top Categories");
                print!(
                    "{}",
                    format_category_totals(
                        &top,
                        &aggregation::percentage_breakdown(expenses),
                        symbol
                    )
                );
            }
        }

        ReportCommands::Categories { all } => {
            let totals = if all {
                aggregation::by_category(expenses, &Category::ALL)
            } else {
                aggregation::chart_by_category(expenses)
            };
            print!(
                "{}",
                format_category_totals(
                    &totals,
                    &aggregation::percentage_breakdown(expenses),
                    symbol
                )
            );
        }

        ReportCommands::Monthly => {
            print!(
                "{}",
                format_monthly_totals(&aggregation::by_month(expenses), symbol)
            );
        }

        ReportCommands::Report {
            range,
            export: write_file,
            output,
        } => {
            let range = ReportRange::parse(&range)?;
            let report = ExpenseReport::generate(expenses, range, today);
            print!("{}", report.format_terminal());

            if write_file {
                let dir = output.unwrap_or_else(|| paths.reports_dir());
                let path = export::export_report(expenses, range, today, &dir)?;
                println!();
                println!("Report exported to: {}", path.display());
            }
        }
    }

    Ok(())
}
