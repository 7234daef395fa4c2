//! Dashboard summary
//!
//! The headline figures shown when the user opens the app: lifetime, this
//! month's, and today's spending, plus the most recent expenses. The clock
//! is an explicit argument; only the CLI consults the wall clock.

use chrono::{Datelike, NaiveDate};

use crate::models::{ExpenseRecord, Money, Period};
use crate::query::{filter_expenses, total_for, ExpenseFilter};

/// Headline spending figures for a session
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// Lifetime total across the whole ledger
    pub total: Money,

    /// Total for the month containing `today`
    pub this_month: Money,

    /// Total for `today` itself
    pub today: Money,

    /// Most recent expenses, newest date first; ties keep insertion order
    pub recent: Vec<ExpenseRecord>,
}

impl DashboardSummary {
    /// Generate the summary as of a given day
    pub fn generate(records: &[ExpenseRecord], today: NaiveDate, recent_count: usize) -> Self {
        let month = Period::month(today.year(), today.month());

        let this_month = total_for(
            filter_expenses(records, &ExpenseFilter::all().within(month)).into_iter(),
        );
        let today_total = total_for(
            filter_expenses(
                records,
                &ExpenseFilter::all().with_from(today).with_to(today),
            )
            .into_iter(),
        );

        let mut recent: Vec<ExpenseRecord> = records.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(recent_count);

        Self {
            total: total_for(records),
            this_month,
            today: today_total,
            recent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_records() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(date(2026, 7, 15), Money::from_rupees(400), "Groceries", ""),
            ExpenseRecord::new(date(2026, 8, 3), Money::from_rupees(50), "Transportation", ""),
            ExpenseRecord::new(date(2026, 8, 8), Money::from_rupees(120), "Groceries", "first"),
            ExpenseRecord::new(date(2026, 8, 8), Money::from_rupees(75), "Health", "second"),
        ]
    }

    #[test]
    fn test_totals() {
        let summary = DashboardSummary::generate(&sample_records(), date(2026, 8, 8), 3);

        assert_eq!(summary.total, Money::from_rupees(645));
        assert_eq!(summary.this_month, Money::from_rupees(245));
        assert_eq!(summary.today, Money::from_rupees(195));
    }

    #[test]
    fn test_injected_clock() {
        // Seen from July, the same ledger reads differently
        let summary = DashboardSummary::generate(&sample_records(), date(2026, 7, 15), 3);

        assert_eq!(summary.this_month, Money::from_rupees(400));
        assert_eq!(summary.today, Money::from_rupees(400));
    }

    #[test]
    fn test_recent_order_and_truncation() {
        let summary = DashboardSummary::generate(&sample_records(), date(2026, 8, 8), 3);

        assert_eq!(summary.recent.len(), 3);
        // Newest date first; the two Aug 8 records keep insertion order
        assert_eq!(summary.recent[0].description, "first");
        assert_eq!(summary.recent[1].description, "second");
        assert_eq!(summary.recent[2].date, date(2026, 8, 3));
    }

    #[test]
    fn test_empty_ledger() {
        let summary = DashboardSummary::generate(&[], date(2026, 8, 8), 5);
        assert_eq!(summary.total, Money::zero());
        assert!(summary.recent.is_empty());
    }
}
