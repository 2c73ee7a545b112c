//! Expense CLI commands
//!
//! Implements CLI commands for recording, browsing and editing expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Category, Expense, ExpenseValidationError, Money};
use crate::reports::{ExpenseQuery, SortField, SortOrder};
use crate::services::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., 12.50)
        amount: String,
        /// Category (e.g., "Food & Dining")
        category: String,
        /// What the money was spent on
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Search description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Sort by date, amount or category
        #[arg(long, default_value = "date")]
        sort: String,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID or unique ID prefix
        id: String,
    },
    /// Edit an expense; omitted fields keep their current values
    Edit {
        /// Expense ID or unique ID prefix
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unique ID prefix
        id: String,
    },
    /// Replace all expenses with freshly generated sample data
    Reset,
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
            let expense = store.create_from_input(&amount, &category, &description, &date)?;

            println!("Added expense: {}", expense.id);
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::List {
            search,
            category,
            sort,
            asc,
            limit,
        } => {
            let mut query = ExpenseQuery::new().sort_by(parse_sort(&sort)?).order(if asc {
                SortOrder::Asc
            } else {
                SortOrder::Desc
            });
            if let Some(text) = search {
                query = query.search(text);
            }
            if let Some(name) = category {
                query = query.category(parse_category(&name)?);
            }

            let mut expenses = query.apply(store.all());
            let matched = expenses.len();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!("{}", format_expense_table(&expenses, symbol));
            if expenses.len() < matched {
                println!("Showing {} of {} expenses.", expenses.len(), matched);
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = resolve(store, &id)?;
            print!("{}", format_expense_details(&expense, symbol));

            let history = store.history(&expense.id)?;
            if !history.is_empty() {
                println!();
                println!("History:");
                for entry in &history {
                    println!("{}", entry.format_human_readable());
                }
            }
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
        } => {
            let existing = resolve(store, &id)?;
            let mut draft = existing.draft();

            if let Some(amount) = amount {
                draft.amount = Money::parse(&amount).map_err(|_| {
                    ExpenseError::Validation(
                        ExpenseValidationError::InvalidAmount(amount.trim().to_string()).to_string(),
                    )
                })?;
            }
            if let Some(category) = category {
                draft.category = parse_category(&category)?;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(date) = date {
                draft.date = parse_date(&date).map_err(|e| ExpenseError::Validation(e.to_string()))?;
            }

            let updated = store.update(&existing.id, draft)?;
            println!("Updated expense: {}", updated.id);
            print!("{}", format_expense_details(&updated, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let target = store.find(&id)?.map(|e| e.id.clone());
            match target {
                Some(expense_id) => match store.delete(&expense_id)? {
                    Some(removed) => println!("Deleted expense: {}", removed),
                    None => println!("No expense found matching '{}'", id),
                },
                None => println!("No expense found matching '{}'", id),
            }
        }

        ExpenseCommands::Reset => {
            let count = store.reset_to_samples(today)?;
            println!("Replaced all expenses with {} sample expenses.", count);
        }
    }

    Ok(())
}

/// Look up an expense by id or prefix, failing if none matches
fn resolve(store: &ExpenseStore, identifier: &str) -> ExpenseResult<Expense> {
    store
        .find(identifier)?
        .cloned()
        .ok_or_else(|| ExpenseError::expense_not_found(identifier))
}

fn parse_category(input: &str) -> ExpenseResult<Category> {
    Category::parse(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}

fn parse_sort(input: &str) -> ExpenseResult<SortField> {
    SortField::parse(input).ok_or_else(|| {
        ExpenseError::Validation(format!(
            "Unknown sort field '{}'. Use date, amount or category",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LoadOutcome;
    use crate::storage::MemoryBlobStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn store() -> ExpenseStore {
        let mut store = ExpenseStore::new(
            Box::new(MemoryBlobStore::with_contents("[]")),
            &Settings::default(),
        );
        assert_eq!(store.load(today()).unwrap(), LoadOutcome::Loaded(0));
        store
    }

    fn add(store: &mut ExpenseStore, amount: &str, category: &str, date: Option<&str>) {
        handle_expense_command(
            store,
            &Settings::default(),
            today(),
            ExpenseCommands::Add {
                amount: amount.into(),
                category: category.into(),
                description: "Something".into(),
                date: date.map(Into::into),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_add_defaults_to_today() {
        let mut store = store();
        add(&mut store, "12.50", "home", None);

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].date, today());
        assert_eq!(store.all()[0].amount, Money::from_cents(1250));
    }

    #[test]
    fn test_edit_keeps_unspecified_fields() {
        let mut store = store();
        add(&mut store, "12.50", "home", Some("2024-03-01"));
        let id = store.all()[0].id.to_string();

        handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::Edit {
                id,
                amount: Some("20".into()),
                category: None,
                description: None,
                date: None,
            },
        )
        .unwrap();

        let edited = &store.all()[0];
        assert_eq!(edited.amount, Money::from_units(20));
        assert_eq!(edited.category, Category::Home);
        assert_eq!(edited.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_edit_unknown_id_is_not_found() {
        let mut store = store();
        let err = handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::Edit {
                id: "expense-missing".into(),
                amount: Some("20".into()),
                category: None,
                description: None,
                date: None,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_unknown_id_is_ok() {
        let mut store = store();
        add(&mut store, "1", "Other", None);

        handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::Delete {
                id: "expense-missing".into(),
            },
        )
        .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_rejects_unknown_sort() {
        let mut store = store();
        let err = handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::List {
                search: None,
                category: None,
                sort: "payee".into(),
                asc: false,
                limit: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
