use anyhow::Result;
use clap::{Parser, Subcommand};

use finsmart::cli::{
    handle_budget_command, handle_dashboard_command, handle_expense_command,
    handle_export_command, handle_invest_command, handle_plan_command, BudgetCommands,
    DashboardArgs, ExpenseCommands, ExportArgs, InvestCommands, PlanCommands,
};

#[derive(Parser)]
#[command(
    name = "finsmart",
    version,
    about = "Terminal personal-finance manager",
    long_about = "FinSmart is a terminal personal-finance manager. It tracks \
                  expenses against category budgets, projects SIP and lumpsum \
                  investment growth, and plans weekly discretionary spending. \
                  Ledger state travels between invocations as a CSV file."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense tracking commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget analysis commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Investment growth projections
    #[command(subcommand)]
    Invest(InvestCommands),

    /// Spending planner commands
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Export the ledger as CSV or JSON
    Export(ExportArgs),

    /// Show the finance dashboard
    Dashboard(DashboardArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(cmd)?,
        Commands::Budget(cmd) => handle_budget_command(cmd)?,
        Commands::Invest(cmd) => handle_invest_command(cmd)?,
        Commands::Plan(cmd) => handle_plan_command(cmd)?,
        Commands::Export(args) => handle_export_command(args)?,
        Commands::Dashboard(args) => handle_dashboard_command(args)?,
    }

    Ok(())
}
