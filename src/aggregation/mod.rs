//! Derived views over an expense collection
//!
//! Everything here is a pure function of its input slice: nothing is cached,
//! persisted or mutated. Category-keyed results always follow the order of
//! [`Category::ALL`](crate::models::Category::ALL).

pub mod categories;
pub mod timeline;

pub use categories::{
    average, by_category, chart_by_category, highest_category, percentage_breakdown,
    top_categories, total, CategoryShare, CategoryTotal,
};
pub use timeline::{by_month, filter_by_date_range, MonthlyTotal};
