//! Expense store
//!
//! Owns the canonical expense collection for a session. Every mutation is
//! validated first, then applied, then written through to the durable blob
//! before the call returns. A failed validation or an unknown id leaves the
//! collection untouched.

use std::collections::HashSet;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::storage::{generate_samples, BlobStore};

/// What `load` found in the durable blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing snapshot with this many records was loaded
    Loaded(usize),
    /// No usable snapshot; this many sample records were generated and persisted
    Seeded(usize),
}

/// The single owner of the expense collection
pub struct ExpenseStore {
    blob: Box<dyn BlobStore>,
    sample_count: usize,
    sample_window_days: u32,
    expenses: Vec<Expense>,
    audit: Option<AuditLogger>,
}

impl ExpenseStore {
    /// Create an empty store backed by `blob`; call [`ExpenseStore::load`] next
    pub fn new(blob: Box<dyn BlobStore>, settings: &Settings) -> Self {
        Self {
            blob,
            sample_count: settings.sample_count,
            sample_window_days: settings.sample_window_days,
            expenses: Vec::new(),
            audit: None,
        }
    }

    /// Append every successful mutation to `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Load the collection from the blob, seeding samples if there is none
    ///
    /// An unreadable or unparseable blob is treated the same as a missing one.
    pub fn load(&mut self, today: NaiveDate) -> ExpenseResult<LoadOutcome> {
        self.load_with_rng(today, &mut rand::thread_rng())
    }

    /// [`ExpenseStore::load`] with a caller-supplied random source for samples
    pub fn load_with_rng<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        rng: &mut R,
    ) -> ExpenseResult<LoadOutcome> {
        match self.blob.read() {
            Ok(Some(contents)) => match serde_json::from_str::<Vec<Expense>>(&contents) {
                Ok(expenses) => {
                    self.expenses = dedupe_ids(discard_invalid(expenses));
                    debug!(count = self.expenses.len(), "loaded expense snapshot");
                    return Ok(LoadOutcome::Loaded(self.expenses.len()));
                }
                Err(e) => warn!(
                    blob = %self.blob.describe(),
                    error = %e,
                    "expense snapshot is unparseable, regenerating sample data"
                ),
            },
            Ok(None) => info!(blob = %self.blob.describe(), "no expense snapshot found"),
            Err(e) => warn!(
                blob = %self.blob.describe(),
                error = %e,
                "failed to read expense snapshot, regenerating sample data"
            ),
        }

        self.expenses = generate_samples(self.sample_count, self.sample_window_days, today, rng);
        info!(count = self.expenses.len(), "seeded sample expenses");
        self.persist()?;
        Ok(LoadOutcome::Seeded(self.expenses.len()))
    }

    /// The current collection, newest-created first
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// An owned copy of the collection
    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Get an expense by id
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Find an expense by exact id or by an unambiguous id prefix
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<&Expense>> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Ok(None);
        }

        if let Some(expense) = self.expenses.iter().find(|e| e.id.as_str() == identifier) {
            return Ok(Some(expense));
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.as_str().starts_with(identifier));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(Some(expense)),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "Id prefix '{}' matches more than one expense",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Logged changes to one expense, oldest first; empty without an audit log
    pub fn history(&self, id: &ExpenseId) -> ExpenseResult<Vec<AuditEntry>> {
        match &self.audit {
            Some(audit) => audit.read_for_expense(id),
            None => Ok(Vec::new()),
        }
    }

    /// Create a new expense from validated fields
    ///
    /// The record is prepended to the collection and persisted.
    pub fn create(&mut self, draft: ExpenseDraft) -> ExpenseResult<Expense> {
        draft
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut expense = Expense::new(draft);
        while self.get(&expense.id).is_some() {
            expense.id = ExpenseId::new();
        }

        self.expenses.insert(0, expense.clone());
        self.persist()?;

        debug!(id = %expense.id, amount = %expense.amount, "created expense");
        self.record(AuditEntry::create(
            expense.id.as_str(),
            Some(expense.description.clone()),
            &expense,
        ))?;

        Ok(expense)
    }

    /// Create an expense from raw user-entered field values
    pub fn create_from_input(
        &mut self,
        amount: &str,
        category: &str,
        description: &str,
        date: &str,
    ) -> ExpenseResult<Expense> {
        let draft = ExpenseDraft::parse(amount, category, description, date)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        self.create(draft)
    }

    /// Replace every field of an existing expense except its id
    pub fn update(&mut self, id: &ExpenseId, draft: ExpenseDraft) -> ExpenseResult<Expense> {
        draft
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.as_str()))?;

        let before = expense.clone();
        expense.apply(draft);
        let after = expense.clone();

        self.persist()?;

        debug!(id = %after.id, "updated expense");
        if self.audit.is_some() {
            let diff = match (serde_json::to_value(&before), serde_json::to_value(&after)) {
                (Ok(b), Ok(a)) => generate_diff(&b, &a),
                _ => None,
            };
            self.record(AuditEntry::update(
                after.id.as_str(),
                Some(after.description.clone()),
                &before,
                &after,
                diff,
            ))?;
        }

        Ok(after)
    }

    /// Remove an expense; deleting an unknown id is a no-op
    ///
    /// Returns the removed record, if there was one.
    pub fn delete(&mut self, id: &ExpenseId) -> ExpenseResult<Option<Expense>> {
        let Some(index) = self.expenses.iter().position(|e| &e.id == id) else {
            debug!(id = %id, "delete of unknown expense ignored");
            return Ok(None);
        };

        let removed = self.expenses.remove(index);
        self.persist()?;

        debug!(id = %removed.id, "deleted expense");
        self.record(AuditEntry::delete(
            removed.id.as_str(),
            Some(removed.description.clone()),
            &removed,
        ))?;

        Ok(Some(removed))
    }

    /// Replace the whole collection and persist it
    pub fn replace_all(&mut self, expenses: Vec<Expense>) -> ExpenseResult<()> {
        let mut seen = HashSet::new();
        if let Some(dup) = expenses.iter().find(|e| !seen.insert(&e.id)) {
            return Err(ExpenseError::Validation(format!(
                "Duplicate expense id: {}",
                dup.id
            )));
        }

        self.expenses = expenses;
        info!(count = self.expenses.len(), "replaced expense collection");
        self.persist()
    }

    /// Throw away the collection and regenerate sample data
    pub fn reset_to_samples(&mut self, today: NaiveDate) -> ExpenseResult<usize> {
        let samples = generate_samples(
            self.sample_count,
            self.sample_window_days,
            today,
            &mut rand::thread_rng(),
        );
        let count = samples.len();
        self.replace_all(samples)?;
        Ok(count)
    }

    /// Serialize the full collection to the blob
    fn persist(&self) -> ExpenseResult<()> {
        let json = serde_json::to_string_pretty(&self.expenses)
            .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expenses: {}", e)))?;

        self.blob.write(&json).map_err(|e| {
            warn!(blob = %self.blob.describe(), error = %e, "failed to persist expenses");
            match e {
                ExpenseError::Storage(_) => e,
                other => ExpenseError::Storage(other.to_string()),
            }
        })
    }

    /// Append to the audit log, if one is attached
    ///
    /// Called after the blob write, so an error here means the mutation is
    /// durable but unaudited.
    fn record(&self, entry: AuditEntry) -> ExpenseResult<()> {
        match &self.audit {
            Some(audit) => audit.log(&entry).map_err(|e| {
                warn!(path = %audit.path().display(), error = %e, "failed to write audit entry");
                e
            }),
            None => Ok(()),
        }
    }
}

/// Drop records that break the expense value rules
fn discard_invalid(expenses: Vec<Expense>) -> Vec<Expense> {
    expenses
        .into_iter()
        .filter(|e| match e.draft().validate() {
            Ok(()) => true,
            Err(reason) => {
                warn!(id = %e.id, %reason, "dropping invalid expense from snapshot");
                false
            }
        })
        .collect()
}

/// Drop records whose id was already seen, keeping the first
fn dedupe_ids(expenses: Vec<Expense>) -> Vec<Expense> {
    let mut seen = HashSet::new();
    let before = expenses.len();
    let unique: Vec<Expense> = expenses
        .into_iter()
        .filter(|e| seen.insert(e.id.clone()))
        .collect();

    if unique.len() != before {
        warn!(
            dropped = before - unique.len(),
            "expense snapshot contained duplicate ids"
        );
    }
    unique
}
