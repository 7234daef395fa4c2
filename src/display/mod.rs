//! Display formatting for terminal output
//!
//! Provides utilities for formatting engine results for terminal display,
//! including tables, progress bars, and severity markers.

pub mod budget;
pub mod expense;
pub mod invest;
pub mod plan;

pub use budget::format_budget_overview;
pub use expense::{format_category_totals, format_expense_table, format_period_totals};
pub use invest::{format_amount, format_lumpsum_report, format_sip_report};
pub use plan::format_weekly_plan;
