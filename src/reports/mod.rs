//! Derived read models
//!
//! Reports pull together ledger, budget, and period data into the shapes
//! the rendering and charting layers consume.

pub mod budget_overview;
pub mod dashboard;

pub use budget_overview::BudgetOverview;
pub use dashboard::DashboardSummary;
