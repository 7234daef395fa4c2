//! Budget vs. actual report
//!
//! Compares spending in a calendar period against the session's budget
//! limits, per category and overall.

use crate::models::{BudgetLine, Money, Period};
use crate::query::{filter_expenses, sum_by_category, total_for, ExpenseFilter};
use crate::session::Session;

/// Budget-versus-actual for one period
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    /// The period the spending was drawn from
    pub period: Period,

    /// One line per budgeted category, registry order; zero-budget
    /// categories are excluded
    pub lines: Vec<BudgetLine>,

    /// Sum of every limit, zero allocations included
    pub total_budget: Money,

    /// Total spending within the period
    pub total_spent: Money,

    /// Budget minus spending; negative when overspent overall
    pub total_remaining: Money,
}

impl BudgetOverview {
    /// Generate the report for a period from the session's ledger and budgets
    pub fn generate(session: &Session, period: Period) -> Self {
        let in_period = filter_expenses(
            session.records(),
            &ExpenseFilter::all().within(period),
        );
        let spent_by_category = sum_by_category(in_period.iter().copied());
        let total_spent = total_for(in_period.into_iter());

        // Registry order keeps the rows stable as budgets change
        let lines = session
            .categories()
            .iter()
            .filter_map(|category| {
                let budget = session.budgets().get(category)?;
                if !budget.is_positive() {
                    return None;
                }
                let spent = spent_by_category
                    .get(category)
                    .copied()
                    .unwrap_or(Money::zero());
                Some(BudgetLine::new(category, budget, spent))
            })
            .collect();

        let total_budget = session.budgets().total();

        Self {
            period,
            lines,
            total_budget,
            total_spent,
            total_remaining: total_budget - total_spent,
        }
    }

    /// Overall remaining budget as a percent of the total, if any budget is set
    pub fn remaining_percent(&self) -> Option<f64> {
        if self.total_budget.is_positive() {
            Some(self.total_remaining.paise() as f64 / self.total_budget.paise() as f64 * 100.0)
        } else {
            None
        }
    }

    /// Check if no category has a positive budget
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
