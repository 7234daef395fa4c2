//! Systematic investment plan (SIP) projection
//!
//! Models a fixed monthly contribution compounding at an annual rate. The
//! monthly series follows the recurrence
//! `value[n] = value[n-1] * (1 + r) + contribution`
//! with growth applied before the month's contribution is added.

use super::{inflation_adjust, real_return_rate, ProjectionPoint};

/// Below this magnitude the real rate is treated as zero: the geometric
/// series closed form divides by the rate and is undefined at zero.
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// A projected SIP growth curve with its inputs
#[derive(Debug, Clone)]
pub struct SipProjection {
    /// Fixed contribution per month
    pub monthly_amount: f64,

    /// Expected annual return, percent
    pub annual_return_percent: f64,

    /// Investment duration in years
    pub years: u32,

    /// One point per month, month 1 through `years * 12`
    pub points: Vec<ProjectionPoint>,
}

/// Key figures summarizing a SIP projection
#[derive(Debug, Clone, Copy)]
pub struct SipSummary {
    /// Everything contributed over the full duration
    pub total_invested: f64,

    /// Nominal value at the final month
    pub final_value: f64,

    /// Final value minus contributions
    pub wealth_gained: f64,

    /// Wealth gained as a percent of contributions
    pub gain_percent: f64,

    /// Real annual return after inflation, as a fraction
    pub real_return_rate: f64,

    /// Final value restated in today's purchasing power
    pub inflation_adjusted_final: f64,
}

/// One year of a SIP projection, taken at every 12th month
#[derive(Debug, Clone, Copy)]
pub struct SipYearRow {
    pub year: u32,
    pub contributed: f64,
    pub value: f64,
    pub wealth_gained: f64,
    pub return_percent: f64,
}

/// Project a fixed monthly investment compounding at an annual rate
///
/// The annual rate converts to a monthly rate via
/// `r = (1 + annual/100)^(1/12) - 1`. Month 1's value is exactly one
/// contribution; each later month grows the prior value first and then adds
/// the contribution. Produces exactly `years * 12` points.
pub fn project_sip(monthly_amount: f64, annual_return_percent: f64, years: u32) -> SipProjection {
    let monthly_rate = (1.0 + annual_return_percent / 100.0).powf(1.0 / 12.0) - 1.0;
    let total_months = years * 12;

    let mut points = Vec::with_capacity(total_months as usize);
    let mut value = 0.0;

    for month in 1..=total_months {
        value = value * (1.0 + monthly_rate) + monthly_amount;
        points.push(ProjectionPoint {
            period: month,
            contributed: monthly_amount * month as f64,
            value,
        });
    }

    SipProjection {
        monthly_amount,
        annual_return_percent,
        years,
        points,
    }
}

impl SipProjection {
    /// Total number of contribution months
    pub fn total_months(&self) -> u32 {
        self.years * 12
    }

    /// Value at the final month; zero for a zero-length projection
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(0.0)
    }

    /// Everything contributed over the full duration
    pub fn total_invested(&self) -> f64 {
        self.monthly_amount * self.total_months() as f64
    }

    /// The monthly series restated in today's purchasing power
    ///
    /// Month `n` is discounted by `n/12` years of inflation.
    pub fn inflation_adjusted_series(&self, annual_inflation_percent: f64) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| inflation_adjust(p.value, annual_inflation_percent, p.period as f64 / 12.0))
            .collect()
    }

    /// Summarize the projection against an expected inflation rate
    ///
    /// The inflation-adjusted final value uses the annuity closed form
    /// `m * ((1+real)^n - 1) / real * (1+real)`, which divides by the real
    /// rate; when inflation cancels the nominal return the value degenerates
    /// to the plain sum of contributions.
    pub fn summary(&self, annual_inflation_percent: f64) -> SipSummary {
        let total_invested = self.total_invested();
        let final_value = self.final_value();
        let wealth_gained = final_value - total_invested;
        let gain_percent = if total_invested > 0.0 {
            wealth_gained / total_invested * 100.0
        } else {
            0.0
        };

        let real = real_return_rate(self.annual_return_percent, annual_inflation_percent);
        let months = self.total_months() as f64;
        let inflation_adjusted_final = if real.abs() < ZERO_RATE_EPSILON {
            self.monthly_amount * months
        } else {
            self.monthly_amount * ((1.0 + real).powf(months) - 1.0) / real * (1.0 + real)
        };

        SipSummary {
            total_invested,
            final_value,
            wealth_gained,
            gain_percent,
            real_return_rate: real,
            inflation_adjusted_final,
        }
    }

    /// The projection sampled at every 12th month
    pub fn yearly_breakdown(&self) -> Vec<SipYearRow> {
        self.points
            .iter()
            .filter(|p| p.period % 12 == 0)
            .map(|p| {
                let wealth_gained = p.value - p.contributed;
                SipYearRow {
                    year: p.period / 12,
                    contributed: p.contributed,
                    value: p.value,
                    wealth_gained,
                    return_percent: if p.contributed > 0.0 {
                        wealth_gained / p.contributed * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect()
    }
}
