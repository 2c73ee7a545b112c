//! Expense Tracker - personal expense recording and spending analysis
//!
//! This library provides the core functionality for the `expenses` command.
//! A single [`ExpenseStore`](services::ExpenseStore) owns the expense
//! collection and writes it through to a durable JSON blob on every change;
//! everything else is derived on demand from read-only snapshots.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, months)
//! - `storage`: The durable blob and sample data
//! - `services`: The expense store
//! - `aggregation`: Totals, category and monthly breakdowns, range filters
//! - `reports`: Dashboard summary, ranged reports and list queries
//! - `export`: CSV export
//! - `audit`: Audit logging system
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::ExpenseStore;
//! use expense_tracker::storage::FileBlobStore;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = ExpenseStore::new(Box::new(FileBlobStore::new(paths.expenses_file())), &settings);
//! store.load(chrono::Local::now().date_naive())?;
//! ```

use std::sync::Once;

pub mod aggregation;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once
///
/// Logs go to stderr. `RUST_LOG` overrides the default of warnings only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_tracker=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
