//! Lump-sum investment projection
//!
//! A single upfront amount compounding yearly:
//! `value[y] = principal * (1 + rate/100)^y`.

use super::{real_return_rate, ProjectionPoint};

/// A projected lump-sum growth curve with its inputs
#[derive(Debug, Clone)]
pub struct LumpSumProjection {
    /// The upfront investment
    pub principal: f64,

    /// Expected annual return, percent
    pub annual_return_percent: f64,

    /// Investment duration in years
    pub years: u32,

    /// One point per year, year 0 through `years` inclusive
    pub points: Vec<ProjectionPoint>,
}

/// Key figures summarizing a lump-sum projection
#[derive(Debug, Clone, Copy)]
pub struct LumpSumSummary {
    /// The upfront investment
    pub principal: f64,

    /// Nominal value at the final year
    pub final_value: f64,

    /// Final value minus principal
    pub wealth_gained: f64,

    /// Wealth gained as a percent of principal
    pub gain_percent: f64,

    /// Real annual return after inflation, as a fraction
    pub real_return_rate: f64,

    /// Final value restated in today's purchasing power
    pub inflation_adjusted_final: f64,
}

/// Project a single upfront investment compounding yearly
///
/// Produces `years + 1` points; point 0 is the untouched principal.
pub fn project_lump_sum(
    principal: f64,
    annual_return_percent: f64,
    years: u32,
) -> LumpSumProjection {
    let growth = 1.0 + annual_return_percent / 100.0;

    let points = (0..=years)
        .map(|year| ProjectionPoint {
            period: year,
            contributed: principal,
            value: principal * growth.powi(year as i32),
        })
        .collect();

    LumpSumProjection {
        principal,
        annual_return_percent,
        years,
        points,
    }
}

impl LumpSumProjection {
    /// Value at the final year
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(self.principal)
    }

    /// Summarize the projection against an expected inflation rate
    ///
    /// The inflation-adjusted final value compounds the principal at the
    /// real rate: `principal * (1 + real)^years`.
    pub fn summary(&self, annual_inflation_percent: f64) -> LumpSumSummary {
        let final_value = self.final_value();
        let wealth_gained = final_value - self.principal;
        let gain_percent = if self.principal > 0.0 {
            wealth_gained / self.principal * 100.0
        } else {
            0.0
        };

        let real = real_return_rate(self.annual_return_percent, annual_inflation_percent);
        let inflation_adjusted_final = self.principal * (1.0 + real).powi(self.years as i32);

        LumpSumSummary {
            principal: self.principal,
            final_value,
            wealth_gained,
            gain_percent,
            real_return_rate: real,
            inflation_adjusted_final,
        }
    }
}
