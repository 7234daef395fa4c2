//! Budget CLI commands
//!
//! Compares a period's spending against per-category limits supplied on
//! the command line.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::format_budget_overview;
use crate::error::{FinSmartError, FinSmartResult};
use crate::models::{Money, Period};
use crate::reports::BudgetOverview;

use super::load_session;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget vs. actual spending for a period
    Status {
        /// Ledger CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Budget limit as "Category=Amount" (repeatable)
        #[arg(short, long = "set", value_name = "CATEGORY=AMOUNT")]
        set: Vec<String>,

        /// Budget period: month or week
        #[arg(long, default_value = "month")]
        period: String,

        /// Specific month to analyze (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(cmd: BudgetCommands) -> FinSmartResult<()> {
    match cmd {
        BudgetCommands::Status {
            file,
            set,
            period,
            month,
        } => {
            let mut session = load_session(&file, false)?;

            for pair in &set {
                let (category, amount) = parse_budget_pair(pair)?;
                session.set_budget(category, amount)?;
            }

            let period = resolve_period(&period, month.as_deref())?;
            let overview = BudgetOverview::generate(&session, period);
            print!("{}", format_budget_overview(&overview));
            Ok(())
        }
    }
}

/// Parse a "Category=Amount" budget argument
fn parse_budget_pair(pair: &str) -> FinSmartResult<(String, Money)> {
    let (category, amount) = pair.split_once('=').ok_or_else(|| {
        FinSmartError::Validation(format!(
            "Budget must be given as CATEGORY=AMOUNT, got: {}",
            pair
        ))
    })?;

    let amount =
        Money::parse(amount).map_err(|e| FinSmartError::Validation(e.to_string()))?;
    Ok((category.trim().to_string(), amount))
}

fn resolve_period(period: &str, month: Option<&str>) -> FinSmartResult<Period> {
    match period {
        "week" => {
            if month.is_some() {
                return Err(FinSmartError::Validation(
                    "--month only applies to the monthly period".into(),
                ));
            }
            Ok(Period::current_week())
        }
        "month" => match month {
            Some(text) => match Period::parse(text) {
                Ok(parsed @ Period::Month { .. }) => Ok(parsed),
                _ => Err(FinSmartError::Validation(format!(
                    "Invalid month (expected YYYY-MM): {}",
                    text
                ))),
            },
            None => Ok(Period::current_month()),
        },
        other => Err(FinSmartError::Validation(format!(
            "Unknown period: {} (expected month or week)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_pair() {
        let (category, amount) = parse_budget_pair("Groceries=2000").unwrap();
        assert_eq!(category, "Groceries");
        assert_eq!(amount, Money::from_rupees(2000));

        let (category, amount) = parse_budget_pair("Food & Drinks=1500.50").unwrap();
        assert_eq!(category, "Food & Drinks");
        assert_eq!(amount, Money::from_paise(150050));

        assert!(parse_budget_pair("Groceries").is_err());
        assert!(parse_budget_pair("Groceries=lots").is_err());
    }

    #[test]
    fn test_resolve_period() {
        assert_eq!(
            resolve_period("month", Some("2026-08")).unwrap(),
            Period::month(2026, 8)
        );
        assert!(resolve_period("month", Some("2026-08-01")).is_err());
        assert!(resolve_period("fortnight", None).is_err());
        assert!(resolve_period("week", Some("2026-08")).is_err());
    }
}
