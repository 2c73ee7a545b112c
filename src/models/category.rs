//! Expense categories
//!
//! Categories are a fixed enumeration. Aggregations walk `Category::ALL`, so
//! their output order is always the enumeration order below.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    FoodAndDining,
    Transportation,
    Entertainment,
    BillsAndUtilities,
    Shopping,
    Healthcare,
    Travel,
    PersonalCare,
    Education,
    Home,
    /// Catch-all for anything else
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 11] = [
        Self::FoodAndDining,
        Self::Transportation,
        Self::Entertainment,
        Self::BillsAndUtilities,
        Self::Shopping,
        Self::Healthcare,
        Self::Travel,
        Self::PersonalCare,
        Self::Education,
        Self::Home,
        Self::Other,
    ];

    /// Categories used when generating sample data
    pub const SAMPLE: [Category; 10] = [
        Self::FoodAndDining,
        Self::Transportation,
        Self::Entertainment,
        Self::BillsAndUtilities,
        Self::Shopping,
        Self::Healthcare,
        Self::Travel,
        Self::PersonalCare,
        Self::Education,
        Self::Home,
    ];

    /// The label stored on disk and shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Travel => "Travel",
            Self::PersonalCare => "Personal Care",
            Self::Education => "Education",
            Self::Home => "Home",
            Self::Other => "Other",
        }
    }

    /// Exact label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Parse user input: trimmed, case-insensitive label match
    pub fn parse(input: &str) -> Result<Self, CategoryParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CategoryParseError::Empty);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(input))
            .ok_or_else(|| CategoryParseError::Unknown(input.to_string()))
    }

    /// Case-insensitive substring match on the label
    pub fn label_contains(&self, needle_lowercase: &str) -> bool {
        self.label().to_lowercase().contains(needle_lowercase)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// Unknown labels in a stored blob fall back to Other rather than failing the
// whole load.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label)
            .or_else(|| Self::parse(&label).ok())
            .unwrap_or(Self::Other))
    }
}

/// Errors from parsing a category label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please select a category"),
            Self::Unknown(label) => {
                let valid: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                write!(
                    f,
                    "Unknown category '{}' (expected one of: {})",
                    label,
                    valid.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}
