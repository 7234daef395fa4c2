//! Expense display formatting
//!
//! Formats ledger records and aggregate tables for terminal output.

use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money, Period};

/// Format expenses as a fixed-width table
pub fn format_expense_table(records: &[&ExpenseRecord]) -> String {
    if records.is_empty() {
        return "No expenses match your filters.".to_string();
    }

    let category_width = records
        .iter()
        .map(|r| r.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:>12}  {:<width$}  {}\n",
        "Date",
        "Amount",
        "Category",
        "Description",
        width = category_width
    ));
    output.push_str(&format!(
        "{:-<10}  {:->12}  {:-<width$}  {:-<20}\n",
        "",
        "",
        "",
        "",
        width = category_width
    ));

    for record in records {
        output.push_str(&format!(
            "{:<10}  {:>12}  {:<width$}  {}\n",
            record.date.format("%Y-%m-%d"),
            record.amount.to_string(),
            record.category,
            record.description,
            width = category_width
        ));
    }

    output
}

/// Format per-category totals with their share of the overall total
pub fn format_category_totals(totals: &BTreeMap<String, Money>) -> String {
    if totals.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let grand_total: Money = totals.values().copied().sum();
    let name_width = totals.keys().map(|k| k.len()).max().unwrap_or(8).max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>7}\n",
        "Category",
        "Total",
        "Share",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->7}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for (category, total) in totals {
        let share = if grand_total.is_positive() {
            total.paise() as f64 / grand_total.paise() as f64 * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>6.1}%\n",
            category,
            total.to_string(),
            share,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "{:-<width$}  {:->12}\n",
        "",
        "",
        width = name_width
    ));
    output.push_str(&format!(
        "{:<width$}  {:>12}\n",
        "Total",
        grand_total.to_string(),
        width = name_width
    ));

    output
}

/// Format per-period totals, ascending by period start
pub fn format_period_totals(totals: &[(Period, Money)]) -> String {
    if totals.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<12}  {:>12}\n", "Period", "Total"));
    output.push_str(&format!("{:-<12}  {:->12}\n", "", ""));

    for (period, total) in totals {
        output.push_str(&format!(
            "{:<12}  {:>12}\n",
            period.to_string(),
            total.to_string()
        ));
    }

    output
}
