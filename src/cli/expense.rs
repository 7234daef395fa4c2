//! Expense CLI commands
//!
//! Implements recording, listing, and summarizing expenses against a
//! ledger CSV file.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_category_totals, format_expense_table, format_period_totals};
use crate::error::{FinSmartError, FinSmartResult};
use crate::models::{Granularity, Money};
use crate::query::{filter_expenses, sum_by_category, sum_by_period, total_for, ExpenseFilter};

use super::{category_filter, load_session, parse_date, save_ledger};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Ledger CSV file (created if missing)
        #[arg(short, long)]
        file: PathBuf,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Amount (e.g., "250" or "250.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Category name
        #[arg(short, long)]
        category: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,

        /// Register the category if it is not already known
        #[arg(long)]
        new_category: bool,
    },

    /// List expenses, optionally filtered
    List {
        /// Ledger CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Restrict to these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Total spending grouped by category or period
    Summary {
        /// Ledger CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Grouping: category, day, week, or month
        #[arg(long, default_value = "category")]
        by: String,

        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Restrict to these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(cmd: ExpenseCommands) -> FinSmartResult<()> {
    match cmd {
        ExpenseCommands::Add {
            file,
            date,
            amount,
            category,
            description,
            new_category,
        } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => chrono::Local::now().date_naive(),
            };
            let amount = Money::parse(&amount)
                .map_err(|e| FinSmartError::Validation(e.to_string()))?;

            let mut session = load_session(&file, true)?;
            if new_category {
                session.register_category(category.clone())?;
            }
            let record = session.add_expense(date, amount, category, description)?;

            println!("Recorded: {}", record);
            save_ledger(&file, &session)?;
            Ok(())
        }

        ExpenseCommands::List {
            file,
            from,
            to,
            category,
        } => {
            let session = load_session(&file, false)?;
            let filter = build_filter(from, to, &category)?;
            let matched = filter_expenses(session.records(), &filter);

            print!("{}", format_expense_table(&matched));
            if !matched.is_empty() {
                println!(
                    "\nTotal: {} ({} expenses)",
                    total_for(matched.iter().copied()),
                    matched.len()
                );
            }
            Ok(())
        }

        ExpenseCommands::Summary {
            file,
            by,
            from,
            to,
            category,
        } => {
            let session = load_session(&file, false)?;
            let filter = build_filter(from, to, &category)?;
            let matched = filter_expenses(session.records(), &filter);

            match by.as_str() {
                "category" => {
                    let totals = sum_by_category(matched.into_iter());
                    print!("{}", format_category_totals(&totals));
                }
                "day" | "week" | "month" => {
                    let granularity = match by.as_str() {
                        "day" => Granularity::Day,
                        "week" => Granularity::Week,
                        _ => Granularity::Month,
                    };
                    let totals = sum_by_period(matched.into_iter(), granularity);
                    print!("{}", format_period_totals(&totals));
                }
                other => {
                    return Err(FinSmartError::Validation(format!(
                        "Unknown grouping: {} (expected category, day, week, or month)",
                        other
                    )));
                }
            }
            Ok(())
        }
    }
}

fn build_filter(
    from: Option<String>,
    to: Option<String>,
    categories: &[String],
) -> FinSmartResult<ExpenseFilter> {
    let mut filter = ExpenseFilter::all().with_categories(category_filter(categories));
    if let Some(text) = from {
        filter = filter.with_from(parse_date(&text)?);
    }
    if let Some(text) = to {
        filter = filter.with_to(parse_date(&text)?);
    }
    Ok(filter)
}
