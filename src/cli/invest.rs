//! Investment calculator CLI commands

use clap::Subcommand;

use crate::display::{format_lumpsum_report, format_sip_report};
use crate::error::{FinSmartError, FinSmartResult};
use crate::invest::{project_lump_sum, project_sip};

/// Investment calculator subcommands
#[derive(Subcommand)]
pub enum InvestCommands {
    /// Project a systematic (monthly) investment plan
    Sip {
        /// Monthly investment amount
        #[arg(short, long)]
        monthly: f64,

        /// Expected annual return, percent
        #[arg(short, long)]
        rate: f64,

        /// Investment duration in years
        #[arg(short, long)]
        years: u32,

        /// Expected annual inflation, percent
        #[arg(short, long, default_value_t = 0.0)]
        inflation: f64,

        /// Show the year-by-year growth table
        #[arg(long)]
        yearly: bool,
    },

    /// Project a one-time lump-sum investment
    Lumpsum {
        /// Investment amount
        #[arg(short, long)]
        amount: f64,

        /// Expected annual return, percent
        #[arg(short, long)]
        rate: f64,

        /// Investment duration in years
        #[arg(short, long)]
        years: u32,

        /// Expected annual inflation, percent
        #[arg(short, long, default_value_t = 0.0)]
        inflation: f64,
    },
}

/// Handle an investment command
pub fn handle_invest_command(cmd: InvestCommands) -> FinSmartResult<()> {
    match cmd {
        InvestCommands::Sip {
            monthly,
            rate,
            years,
            inflation,
            yearly,
        } => {
            check_inputs(monthly, "Monthly amount", rate, inflation)?;
            let projection = project_sip(monthly, rate, years);
            print!("{}", format_sip_report(&projection, inflation, yearly));
            Ok(())
        }

        InvestCommands::Lumpsum {
            amount,
            rate,
            years,
            inflation,
        } => {
            check_inputs(amount, "Investment amount", rate, inflation)?;
            let projection = project_lump_sum(amount, rate, years);
            print!("{}", format_lumpsum_report(&projection, inflation));
            Ok(())
        }
    }
}

fn check_inputs(amount: f64, what: &str, rate: f64, inflation: f64) -> FinSmartResult<()> {
    if amount < 0.0 {
        return Err(FinSmartError::negative_amount(what));
    }
    if rate < 0.0 {
        return Err(FinSmartError::negative_amount("Return rate"));
    }
    if inflation < 0.0 {
        return Err(FinSmartError::negative_amount("Inflation rate"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_inputs() {
        assert!(check_inputs(1000.0, "Amount", 12.0, 6.0).is_ok());
        assert!(check_inputs(-1.0, "Amount", 12.0, 6.0).is_err());
        assert!(check_inputs(1000.0, "Amount", -0.5, 6.0).is_err());
        assert!(check_inputs(1000.0, "Amount", 12.0, -6.0).is_err());
    }
}
