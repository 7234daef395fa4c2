//! Budget allocation model
//!
//! Tracks the per-category spending limits set by the user and the
//! three-tier severity rule used when comparing spending against them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;

/// Per-category budget limits
///
/// Keys must always exist in the session's category registry; the session
/// enforces that by registering new categories before setting their limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetBook {
    limits: BTreeMap<String, Money>,
}

impl BudgetBook {
    /// Create an empty budget book
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a category, replacing any existing value
    pub fn set(&mut self, category: impl Into<String>, limit: Money) -> Result<(), BudgetValidationError> {
        if limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }
        self.limits.insert(category.into(), limit);
        Ok(())
    }

    /// Get the limit for a category, if one has been set
    pub fn get(&self, category: &str) -> Option<Money> {
        self.limits.get(category).copied()
    }

    /// Iterate over all (category, limit) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.limits.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of every limit, zero allocations included
    pub fn total(&self) -> Money {
        self.limits.values().copied().sum()
    }

    /// Number of categories with a limit set
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Check if no limits have been set
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

/// Severity of a category's budget usage
///
/// Thresholds are 60% and 80% of the budget, inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Under 60% used
    Ok,
    /// 60% to just under 80% used
    Warning,
    /// 80% or more used, including over budget
    Critical,
}

impl Severity {
    /// Classify a percent-used figure
    pub fn from_percent_used(percent: f64) -> Self {
        if percent >= 80.0 {
            Self::Critical
        } else if percent >= 60.0 {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// One category's budget-versus-actual line
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    /// Category name
    pub category: String,

    /// The budget limit; always positive for a reported line
    pub budget: Money,

    /// Amount spent in the period
    pub spent: Money,

    /// Budget minus spent; negative when over budget
    pub remaining: Money,

    /// Percent of budget used, capped at 100
    pub percent_used: f64,

    /// Three-tier classification of `percent_used`
    pub severity: Severity,
}

impl BudgetLine {
    /// Build a line from a limit and the spending against it
    ///
    /// `budget` must be positive; zero-budget categories are excluded
    /// before lines are built, which keeps the division well-defined.
    pub fn new(category: impl Into<String>, budget: Money, spent: Money) -> Self {
        let raw_percent = spent.paise() as f64 / budget.paise() as f64 * 100.0;
        let percent_used = raw_percent.min(100.0);
        Self {
            category: category.into(),
            budget,
            spent,
            remaining: budget - spent,
            percent_used,
            severity: Severity::from_percent_used(percent_used),
        }
    }

    /// The overrun amount when spending exceeded the budget
    pub fn over_by(&self) -> Option<Money> {
        if self.remaining.is_negative() {
            Some(self.remaining.abs())
        } else {
            None
        }
    }
}

/// Validation errors for budget limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
