//! Projection display formatting
//!
//! Renders SIP and lump-sum projection summaries and growth tables.

use crate::invest::{LumpSumProjection, SipProjection};

/// Format a SIP projection summary, with an optional yearly growth table
pub fn format_sip_report(
    projection: &SipProjection,
    annual_inflation_percent: f64,
    show_yearly: bool,
) -> String {
    let summary = projection.summary(annual_inflation_percent);

    let mut output = String::new();
    output.push_str("SIP Investment Summary\n");
    output.push_str(&format!("{}\n", "=".repeat(48)));
    output.push_str(&format!(
        "Monthly investment:       {}\n",
        format_amount(projection.monthly_amount)
    ));
    output.push_str(&format!(
        "Duration:                 {} years ({} months)\n",
        projection.years,
        projection.total_months()
    ));
    output.push_str(&format!(
        "Expected annual return:   {:.1}%\n",
        projection.annual_return_percent
    ));
    output.push_str(&format!(
        "Total amount invested:    {}\n",
        format_amount(summary.total_invested)
    ));
    output.push_str(&format!(
        "Expected final value:     {}\n",
        format_amount(summary.final_value)
    ));
    output.push_str(&format!(
        "Wealth gained:            {} ({:+.1}%)\n",
        format_amount(summary.wealth_gained),
        summary.gain_percent
    ));

    if annual_inflation_percent > 0.0 {
        output.push_str(&format!(
            "Inflation-adjusted value: {}\n",
            format_amount(summary.inflation_adjusted_final)
        ));
        output.push_str(&format!(
            "Real return rate:         {:.2}%\n",
            summary.real_return_rate * 100.0
        ));
    }

    if show_yearly {
        output.push('\n');
        output.push_str(&format_sip_yearly_table(projection));
    }

    output
}

/// Format the year-by-year SIP growth table
pub fn format_sip_yearly_table(projection: &SipProjection) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:>14}  {:>14}  {:>14}  {:>8}\n",
        "Year", "Invested", "Value", "Gained", "Return"
    ));
    output.push_str(&format!(
        "{:->4}  {:->14}  {:->14}  {:->14}  {:->8}\n",
        "", "", "", "", ""
    ));

    for row in projection.yearly_breakdown() {
        output.push_str(&format!(
            "{:>4}  {:>14}  {:>14}  {:>14}  {:>7.1}%\n",
            row.year,
            format_amount(row.contributed),
            format_amount(row.value),
            format_amount(row.wealth_gained),
            row.return_percent
        ));
    }

    output
}

/// Format a lump-sum projection summary with its yearly growth table
pub fn format_lumpsum_report(projection: &LumpSumProjection, annual_inflation_percent: f64) -> String {
    let summary = projection.summary(annual_inflation_percent);

    let mut output = String::new();
    output.push_str("Lumpsum Investment Summary\n");
    output.push_str(&format!("{}\n", "=".repeat(48)));
    output.push_str(&format!(
        "Initial investment:       {}\n",
        format_amount(projection.principal)
    ));
    output.push_str(&format!(
        "Duration:                 {} years\n",
        projection.years
    ));
    output.push_str(&format!(
        "Expected annual return:   {:.1}%\n",
        projection.annual_return_percent
    ));
    output.push_str(&format!(
        "Expected final value:     {}\n",
        format_amount(summary.final_value)
    ));
    output.push_str(&format!(
        "Wealth gained:            {} ({:+.1}%)\n",
        format_amount(summary.wealth_gained),
        summary.gain_percent
    ));

    if annual_inflation_percent > 0.0 {
        output.push_str(&format!(
            "Inflation-adjusted value: {}\n",
            format_amount(summary.inflation_adjusted_final)
        ));
        output.push_str(&format!(
            "Real return rate:         {:.2}%\n",
            summary.real_return_rate * 100.0
        ));
    }

    output.push('\n');
    output.push_str(&format!("{:>4}  {:>14}\n", "Year", "Value"));
    output.push_str(&format!("{:->4}  {:->14}\n", "", ""));
    for point in &projection.points {
        output.push_str(&format!(
            "{:>4}  {:>14}\n",
            point.period,
            format_amount(point.value)
        ));
    }

    output
}

/// Format a fractional rupee amount with thousands grouping: "₹310,584.82"
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as i64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₹{}.{:02}", grouped, paise)
    } else {
        format!("₹{}.{:02}", grouped, paise)
    }
}
