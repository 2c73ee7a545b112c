//! Report time ranges
//!
//! A `ReportRange` is what the user picks ("last 30 days", "February 2024");
//! resolving it against today's date yields the concrete inclusive `DateRange`.

use chrono::{Duration, Months, NaiveDate};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::YearMonth;

/// A relative or fixed reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportRange {
    Last7Days,
    #[default]
    Last30Days,
    Last3Months,
    Last6Months,
    ThisMonth,
    /// A specific calendar month
    Month(YearMonth),
}

/// Concrete inclusive date bounds with a display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl ReportRange {
    /// Resolve to concrete bounds as of `today`
    ///
    /// Relative ranges end at `today`; month ranges cover the whole month.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let (start, end) = match self {
            Self::Last7Days => (today - Duration::days(7), today),
            Self::Last30Days => (months_before(today, 1), today),
            Self::Last3Months => (months_before(today, 3), today),
            Self::Last6Months => (months_before(today, 6), today),
            Self::ThisMonth => {
                let month = YearMonth::of(today);
                (month.first_day(), month.last_day())
            }
            Self::Month(month) => (month.first_day(), month.last_day()),
        };

        DateRange {
            start,
            end,
            label: self.label(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Last7Days => "Last 7 Days".to_string(),
            Self::Last30Days => "Last 30 Days".to_string(),
            Self::Last3Months => "Last 3 Months".to_string(),
            Self::Last6Months => "Last 6 Months".to_string(),
            Self::ThisMonth => "This Month".to_string(),
            Self::Month(month) => month.long_label(),
        }
    }

    /// Parse a range name such as "last30days", "7d", "this-month" or "2024-02"
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_'))
            .collect();

        match normalized.replace('-', "").as_str() {
            "last7days" | "7days" | "7d" | "week" => return Ok(Self::Last7Days),
            "last30days" | "30days" | "30d" | "1m" => return Ok(Self::Last30Days),
            "last3months" | "3months" | "3m" => return Ok(Self::Last3Months),
            "last6months" | "6months" | "6m" => return Ok(Self::Last6Months),
            "thismonth" | "month" | "current" => return Ok(Self::ThisMonth),
            _ => {}
        }

        YearMonth::parse(&normalized).map(Self::Month).map_err(|_| {
            ExpenseError::Validation(format!(
                "Unknown report range '{}'. Use last7days, last30days, last3months, \
                 last6months, thismonth or YYYY-MM",
                s.trim()
            ))
        })
    }
}

impl fmt::Display for ReportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// `date` moved back by whole calendar months, clamped to the end of shorter months
fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}
