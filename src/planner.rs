//! Weekly discretionary-spending planner
//!
//! Splits a weekly pocket-money amount across the seven days, either evenly
//! or by user-supplied percentages. Allocation is exact: rounding residue
//! lands on the final day so the rows always sum back to the input.

use std::fmt;

use crate::error::{FinSmartError, FinSmartResult};
use crate::models::Money;

/// Day names, Monday-first
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Tolerance when checking that custom percentages sum to 100
const PERCENT_SUM_TOLERANCE: f64 = 0.1;

/// How to split the week's pocket money
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Every day gets one seventh
    Equal,
    /// Per-day percentages, Monday-first; must sum to 100
    Custom([f64; 7]),
}

/// One day's recommended spending limit
#[derive(Debug, Clone, PartialEq)]
pub struct DayAllowance {
    pub day: &'static str,
    pub percent: f64,
    pub amount: Money,
}

/// A full week's spending plan
#[derive(Debug, Clone)]
pub struct WeeklyPlan {
    pub pocket_money: Money,
    pub days: Vec<DayAllowance>,
}

impl WeeklyPlan {
    /// Sum of the daily allowances; always equals the pocket money
    pub fn total(&self) -> Money {
        self.days.iter().map(|d| d.amount).sum()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Custom(_) => write!(f, "custom"),
        }
    }
}

/// Build a weekly plan from a pocket-money amount and a distribution
///
/// Custom percentages are rejected when any entry is negative or when the
/// sum strays more than 0.1 from 100.
pub fn plan_week(pocket_money: Money, distribution: Distribution) -> FinSmartResult<WeeklyPlan> {
    if pocket_money.is_negative() {
        return Err(FinSmartError::negative_amount("Pocket money"));
    }

    let fractions: [f64; 7] = match distribution {
        Distribution::Equal => [1.0 / 7.0; 7],
        Distribution::Custom(percents) => {
            if let Some(bad) = percents.iter().find(|p| **p < 0.0) {
                return Err(FinSmartError::Validation(format!(
                    "Day percentage cannot be negative: {}",
                    bad
                )));
            }
            let total: f64 = percents.iter().sum();
            if (total - 100.0).abs() > PERCENT_SUM_TOLERANCE {
                return Err(FinSmartError::Validation(format!(
                    "Day percentages must sum to 100, got {:.1}",
                    total
                )));
            }
            let mut fractions = [0.0; 7];
            for (f, p) in fractions.iter_mut().zip(percents.iter()) {
                *f = p / 100.0;
            }
            fractions
        }
    };

    let mut days = Vec::with_capacity(7);
    let mut allocated = Money::zero();

    for (i, (day, frac)) in DAYS_OF_WEEK.into_iter().zip(fractions).enumerate() {
        // The last day absorbs the rounding residue
        let amount = if i == 6 {
            pocket_money - allocated
        } else {
            pocket_money.fraction(frac)
        };
        allocated += amount;
        days.push(DayAllowance {
            day,
            percent: frac * 100.0,
            amount,
        });
    }

    Ok(WeeklyPlan { pocket_money, days })
}
