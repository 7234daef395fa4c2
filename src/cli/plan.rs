//! Weekly spending planner CLI commands

use clap::Subcommand;

use crate::display::format_weekly_plan;
use crate::error::{FinSmartError, FinSmartResult};
use crate::models::Money;
use crate::planner::{plan_week, Distribution};

/// Spending planner subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Split weekly pocket money into daily spending limits
    Week {
        /// Weekly pocket money amount
        #[arg(short, long)]
        amount: String,

        /// Custom per-day percentages, Monday-first, comma-separated
        /// (e.g. "20,20,20,10,10,10,10"); omitted means an equal split
        #[arg(long)]
        split: Option<String>,
    },
}

/// Handle a planner command
pub fn handle_plan_command(cmd: PlanCommands) -> FinSmartResult<()> {
    match cmd {
        PlanCommands::Week { amount, split } => {
            let pocket_money =
                Money::parse(&amount).map_err(|e| FinSmartError::Validation(e.to_string()))?;

            let distribution = match split {
                Some(text) => Distribution::Custom(parse_split(&text)?),
                None => Distribution::Equal,
            };

            let plan = plan_week(pocket_money, distribution)?;
            print!("{}", format_weekly_plan(&plan));
            Ok(())
        }
    }
}

/// Parse seven comma-separated day percentages
fn parse_split(text: &str) -> FinSmartResult<[f64; 7]> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 7 {
        return Err(FinSmartError::Validation(format!(
            "Expected 7 day percentages, got {}",
            parts.len()
        )));
    }

    let mut percents = [0.0; 7];
    for (slot, part) in percents.iter_mut().zip(parts.iter()) {
        *slot = part.parse().map_err(|_| {
            FinSmartError::Validation(format!("Invalid percentage: {}", part))
        })?;
    }
    Ok(percents)
}
