//! Audit history command

use crate::audit::AuditLogger;
use crate::error::ExpenseResult;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> ExpenseResult<()> {
    let mut entries = logger.read_all()?;
    let total = entries.len();

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    let shown = entries.split_off(total.saturating_sub(limit));
    for entry in &shown {
        println!("{}", entry.format_human_readable());
    }

    if total > shown.len() {
        println!();
        println!("Showing {} of {} entries.", shown.len(), total);
    }

    Ok(())
}
