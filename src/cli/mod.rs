//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the engine. Ledger state travels between
//! invocations via the CSV interchange file.

pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod export;
pub mod invest;
pub mod plan;

pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use invest::{handle_invest_command, InvestCommands};
pub use plan::{handle_plan_command, PlanCommands};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{FinSmartError, FinSmartResult};
use crate::export::{read_expenses_csv, write_expenses_csv};
use crate::query::CategoryFilter;
use crate::session::Session;

/// Load a session from a ledger CSV file
///
/// With `allow_missing`, a nonexistent file yields a fresh session (used by
/// `expense add`, which creates the file); otherwise it is an error so a
/// mistyped path does not read as an empty ledger.
pub(crate) fn load_session(path: &Path, allow_missing: bool) -> FinSmartResult<Session> {
    if !path.exists() {
        if allow_missing {
            return Ok(Session::new());
        }
        return Err(FinSmartError::Io(format!(
            "Ledger file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let records = read_expenses_csv(BufReader::new(file))?;
    Session::restore(records)
}

/// Write a session's ledger back to its CSV file
pub(crate) fn save_ledger(path: &Path, session: &Session) -> FinSmartResult<()> {
    let mut file = File::create(path)?;
    write_expenses_csv(session.records(), &mut file)
}

/// Parse a `YYYY-MM-DD` CLI date argument
pub(crate) fn parse_date(text: &str) -> FinSmartResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| FinSmartError::bad_date(text))
}

/// Map repeated `--category` flags to a filter: none given means all
pub(crate) fn category_filter(categories: &[String]) -> CategoryFilter {
    if categories.is_empty() {
        CategoryFilter::All
    } else {
        CategoryFilter::only(categories.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-08-08").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
        );
        assert!(parse_date("08/08/2026").is_err());
    }

    #[test]
    fn test_category_filter_empty_means_all() {
        assert_eq!(category_filter(&[]), CategoryFilter::All);

        let filter = category_filter(&["Groceries".to_string()]);
        assert!(filter.matches("Groceries"));
        assert!(!filter.matches("Health"));
    }

    #[test]
    fn test_load_session_missing_file() {
        let path = Path::new("/nonexistent/ledger.csv");
        assert!(load_session(path, false).is_err());
        assert!(load_session(path, true).unwrap().records().is_empty());
    }
}
