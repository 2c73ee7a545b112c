//! Expense identifiers
//!
//! Ids are opaque strings. Fresh ids are `expense-` followed by a v4 UUID in
//! simple form, but any non-empty string read back from the blob is kept as-is
//! so ids written by older snapshots (`expense-1`) stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const ID_PREFIX: &str = "expense-";

/// Unique, immutable identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(format!("{}{}", ID_PREFIX, Uuid::new_v4().simple()))
    }

    /// Id for the n-th generated sample record
    pub fn sample(n: usize) -> Self {
        Self(format!("{}{}", ID_PREFIX, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for tables: the prefix plus the first 8 characters
    pub fn short(&self) -> &str {
        let end = ID_PREFIX.len() + 8;
        if self.0.starts_with(ID_PREFIX) && self.0.len() > end && self.0.is_char_boundary(end) {
            &self.0[..end]
        } else {
            &self.0
        }
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
