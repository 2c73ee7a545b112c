//! CSV export of expense rows
//!
//! Free-text fields are quoted per RFC 4180 when they contain a delimiter,
//! quote or line break, so an exported file always parses back to the same rows.

use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::reports::{ExpenseReport, ReportRange};
use crate::storage::write_atomic;

/// Header row of every expense CSV
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// Write expenses as CSV rows, in the order given
pub fn write_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = expense.amount.to_decimal_string();
        csv_writer
            .write_record([
                date.as_str(),
                expense.category.label(),
                expense.description.as_str(),
                amount.as_str(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Serialize expenses to a CSV string
pub fn to_csv(expenses: &[Expense]) -> ExpenseResult<String> {
    let mut buffer = Vec::new();
    write_csv(expenses, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// `expense_report_<start>_to_<end>.csv`
pub fn report_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "expense_report_{}_to_{}.csv",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

/// Write the report for `range` into `dir`, returning the file's path
pub fn export_report(
    expenses: &[Expense],
    range: ReportRange,
    today: NaiveDate,
    dir: &Path,
) -> ExpenseResult<PathBuf> {
    let report = ExpenseReport::generate(expenses, range, today);
    let path = dir.join(report.filename());

    let csv = to_csv(&report.expenses)?;
    write_atomic(&path, csv.as_bytes())
        .map_err(|e| ExpenseError::Export(format!("{}: {}", path.display(), e)))?;

    Ok(path)
}
