//! User settings for the expense tracker
//!
//! Manages user preferences: currency symbol, how first-run sample data is
//! generated, chart sizing, and whether mutations are audited.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::write_json_atomic;

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of sample expenses generated on first run
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Sample expense dates fall within this many days before today
    #[serde(default = "default_sample_window_days")]
    pub sample_window_days: u32,

    /// How many categories the top-spending chart shows
    #[serde(default = "default_chart_top_categories")]
    pub chart_top_categories: usize,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_sample_count() -> usize {
    20
}

fn default_sample_window_days() -> u32 {
    60
}

fn default_chart_top_categories() -> usize {
    6
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            sample_count: default_sample_count(),
            sample_window_days: default_sample_window_days(),
            chart_top_categories: default_chart_top_categories(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }
}
