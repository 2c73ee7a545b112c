//! First-run sample data
//!
//! When no snapshot exists the store seeds itself with a batch of plausible
//! expenses: fixed shape, random values, spread over the recent past.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{Category, Expense, ExpenseDraft, ExpenseId, Money};

/// Smallest sample amount, in whole units
const MIN_SAMPLE_UNITS: i64 = 5;
/// Number of distinct whole-unit amounts above the minimum
const SAMPLE_UNIT_SPREAD: i64 = 200;

/// Generate `count` sample expenses dated within `window_days` before `today`
///
/// Ids are `expense-1` through `expense-<count>`. Amounts are whole units in
/// `[5, 204]`. Categories are drawn uniformly from [`Category::SAMPLE`].
pub fn generate_samples<R: Rng + ?Sized>(
    count: usize,
    window_days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Expense> {
    (0..count)
        .map(|i| {
            let category = Category::SAMPLE[rng.gen_range(0..Category::SAMPLE.len())];
            let amount =
                Money::from_units(MIN_SAMPLE_UNITS + rng.gen_range(0..SAMPLE_UNIT_SPREAD));
            let days_back = if window_days == 0 {
                0
            } else {
                rng.gen_range(0..window_days)
            };
            let date = today - Duration::days(i64::from(days_back));

            Expense::with_id(
                ExpenseId::sample(i + 1),
                ExpenseDraft::new(
                    amount,
                    category,
                    format!("Sample {} expense", category),
                    date,
                ),
            )
        })
        .collect()
}
