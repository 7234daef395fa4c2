//! Budget display formatting
//!
//! Renders the budget-versus-actual report with progress bars and
//! severity markers.

use crate::models::Severity;
use crate::reports::BudgetOverview;

const BAR_WIDTH: usize = 20;

/// Format a budget overview for terminal output
pub fn format_budget_overview(overview: &BudgetOverview) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget vs. Actual: {}\n", overview.period));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if overview.is_empty() {
        output.push_str("No budgets set. Use 'finsmart budget status --set' to add one.\n");
        return output;
    }

    for line in &overview.lines {
        output.push_str(&format!(
            "\n{} {}: {} of {}\n",
            severity_marker(line.severity),
            line.category,
            line.spent,
            line.budget
        ));
        output.push_str(&format!(
            "  [{}] {:.1}%\n",
            progress_bar(line.percent_used),
            line.percent_used
        ));

        if let Some(over) = line.over_by() {
            output.push_str(&format!("  Over budget by {}\n", over));
        } else if line.severity == Severity::Critical {
            output.push_str(&format!("  Only {} left in budget\n", line.remaining));
        }
    }

    output.push_str(&format!("\n{}\n", "-".repeat(60)));
    output.push_str(&format!(
        "Total budget: {}   Spent: {}   Remaining: {}",
        overview.total_budget, overview.total_spent, overview.total_remaining
    ));
    if let Some(pct) = overview.remaining_percent() {
        output.push_str(&format!(" ({:.1}%)", pct));
    }
    output.push('\n');

    output
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "✓",
        Severity::Warning => "⚠",
        Severity::Critical => "✗",
    }
}
