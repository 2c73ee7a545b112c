use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{
    handle_expense_command, handle_history_command, handle_report_command, ExpenseCommands,
    ReportCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::services::{ExpenseStore, LoadOutcome};
use expense_tracker::storage::FileBlobStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses and see where the money goes",
    long_about = "Record expenses by amount, category, description and date, then \
                  browse them, break spending down by category and month, and \
                  export time-ranged reports as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_tracker::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    let today = chrono::Local::now().date_naive();

    // Initialize the store
    let mut store = ExpenseStore::new(
        Box::new(FileBlobStore::new(paths.expenses_file())),
        &settings,
    );
    if settings.audit_enabled {
        store = store.with_audit(AuditLogger::new(paths.audit_log()));
    }
    match store.load(today) {
        Ok(LoadOutcome::Seeded(count)) => info!(count, "first run, generated sample expenses"),
        Ok(LoadOutcome::Loaded(_)) => {}
        // The seeded samples are still in memory; only their persistence failed
        Err(e) if e.is_storage() => {
            warn!(error = %e, "could not save sample expenses, continuing in memory")
        }
        Err(e) => return Err(e.into()),
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, today, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &paths, &settings, today, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&AuditLogger::new(paths.audit_log()), limit)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Expenses file:     {}", paths.expenses_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Sample count:        {}", settings.sample_count);
            println!("  Sample window days:  {}", settings.sample_window_days);
            println!("  Chart categories:    {}", settings.chart_top_categories);
            println!("  Audit enabled:       {}", settings.audit_enabled);
            println!();
            println!("Expenses stored:       {}", store.len());
        }
        None => {
            println!("Expense Tracker - record and analyze your spending");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses summary' for an overview.");
        }
    }

    Ok(())
}
