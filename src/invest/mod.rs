//! Investment growth projections
//!
//! Pure closed-form and recurrence math for systematic (SIP) and lump-sum
//! investing, with inflation adjustment. All values are fractional rupees
//! (`f64`); nothing here touches ledger state.

pub mod lumpsum;
pub mod sip;

pub use lumpsum::{project_lump_sum, LumpSumProjection, LumpSumSummary};
pub use sip::{project_sip, SipProjection, SipSummary, SipYearRow};

/// One point of a projected growth curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    /// Period index: month number for SIP (1-based), year for lump sum (0-based)
    pub period: u32,

    /// Cumulative amount contributed through this period
    pub contributed: f64,

    /// Projected value at this period
    pub value: f64,
}

/// Discount a future nominal value to present purchasing power
///
/// `elapsed_years` may be fractional (month/12 for monthly series).
/// Zero inflation is a no-op.
pub fn inflation_adjust(value: f64, annual_inflation_percent: f64, elapsed_years: f64) -> f64 {
    value / (1.0 + annual_inflation_percent / 100.0).powf(elapsed_years)
}

/// The real (inflation-deflated) annual return rate, as a fraction
pub fn real_return_rate(annual_return_percent: f64, annual_inflation_percent: f64) -> f64 {
    (1.0 + annual_return_percent / 100.0) / (1.0 + annual_inflation_percent / 100.0) - 1.0
}
