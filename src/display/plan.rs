//! Weekly plan display formatting

use crate::planner::WeeklyPlan;

/// Format a weekly spending plan as a table
pub fn format_weekly_plan(plan: &WeeklyPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Weekly Spending Plan for {}\n",
        plan.pocket_money
    ));
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!(
        "{:<10}  {:>8}  {:>12}\n",
        "Day", "Share", "Amount"
    ));
    output.push_str(&format!("{:-<10}  {:->8}  {:->12}\n", "", "", ""));

    for day in &plan.days {
        output.push_str(&format!(
            "{:<10}  {:>7.1}%  {:>12}\n",
            day.day,
            day.percent,
            day.amount.to_string()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::planner::{plan_week, Distribution};

    #[test]
    fn test_plan_output() {
        let plan = plan_week(Money::from_rupees(1000), Distribution::Equal).unwrap();
        let output = format_weekly_plan(&plan);

        assert!(output.contains("Monday"));
        assert!(output.contains("Sunday"));
        assert!(output.contains("₹1000.00"));
        assert!(output.contains("14.3%"));
    }
}
