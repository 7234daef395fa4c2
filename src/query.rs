//! Pure query and aggregation functions over expense records
//!
//! Nothing here mutates: callers pass a slice of records (usually the whole
//! ledger) and get back filtered views or aggregate tables. The rendering
//! and charting layers consume these results directly.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ExpenseRecord, Granularity, Money, Period};

/// Which categories a filter matches
///
/// The distinction is explicit so the "empty selection" ambiguity of a UI
/// multi-select cannot leak into the engine: `All` matches every category,
/// `Only` matches exactly the named set, and `Only` of an empty set matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category constraint
    #[default]
    All,
    /// Match only the named categories; empty means match nothing
    Only(BTreeSet<String>),
}

impl CategoryFilter {
    /// Build an `Only` filter from category names
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    /// Check whether a category passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(category),
        }
    }
}

/// Filter criteria for expense queries
///
/// Date bounds are inclusive; a missing bound is unconstrained.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub categories: CategoryFilter,
}

impl ExpenseFilter {
    /// A filter that matches everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to dates on or after `from`
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Restrict to dates on or before `to`
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Restrict to dates inside a calendar period
    pub fn within(mut self, period: Period) -> Self {
        self.from = Some(period.start_date());
        self.to = Some(period.end_date());
        self
    }

    /// Restrict to a category set
    pub fn with_categories(mut self, categories: CategoryFilter) -> Self {
        self.categories = categories;
        self
    }

    /// Check whether a record passes this filter
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if let Some(from) = self.from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.date > to {
                return false;
            }
        }
        self.categories.matches(&record.category)
    }
}

/// Return the records matching a filter, in input order
pub fn filter_expenses<'a>(
    records: &'a [ExpenseRecord],
    filter: &ExpenseFilter,
) -> Vec<&'a ExpenseRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Total spending per category
///
/// Categories absent from the input are absent from the result; the map
/// is keyed deterministically regardless of input order.
pub fn sum_by_category<'a, I>(records: I) -> BTreeMap<String, Money>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for record in records {
        *totals.entry(record.category.clone()).or_insert(Money::zero()) += record.amount;
    }
    totals
}

/// Total spending per calendar period, ascending by period start
pub fn sum_by_period<'a, I>(records: I, granularity: Granularity) -> Vec<(Period, Money)>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut totals: BTreeMap<Period, Money> = BTreeMap::new();
    for record in records {
        let period = Period::from_date(record.date, granularity);
        *totals.entry(period).or_insert(Money::zero()) += record.amount;
    }
    totals.into_iter().collect()
}

/// Sum of all amounts; zero for an empty sequence
pub fn total_for<'a, I>(records: I) -> Money
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    records.into_iter().map(|r| r.amount).sum()
}
