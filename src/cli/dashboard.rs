//! Dashboard CLI command

use std::path::PathBuf;

use clap::Args;

use crate::display::format_expense_table;
use crate::error::FinSmartResult;
use crate::reports::DashboardSummary;

use super::load_session;

/// Show the finance dashboard
#[derive(Args)]
pub struct DashboardArgs {
    /// Ledger CSV file
    #[arg(short, long)]
    pub file: PathBuf,

    /// How many recent expenses to show
    #[arg(long, default_value_t = 5)]
    pub recent: usize,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(args: DashboardArgs) -> FinSmartResult<()> {
    let session = load_session(&args.file, false)?;
    let today = chrono::Local::now().date_naive();
    let summary = DashboardSummary::generate(session.records(), today, args.recent);

    println!("Finance Dashboard");
    println!("{}", "=".repeat(48));
    println!("Total expenses: {}", summary.total);
    println!("This month:     {}", summary.this_month);
    println!("Today:          {}", summary.today);

    if !summary.recent.is_empty() {
        println!("\nRecent Expenses");
        let refs: Vec<_> = summary.recent.iter().collect();
        print!("{}", format_expense_table(&refs));
    } else {
        println!("\nNo expenses recorded yet. Start by adding your first expense!");
    }

    Ok(())
}
