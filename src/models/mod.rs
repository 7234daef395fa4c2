//! Core data models for FinSmart
//!
//! This module contains the data structures that represent the domain:
//! money, expense records, the category registry, budget limits, and
//! calendar periods.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use budget::{BudgetBook, BudgetLine, Severity};
pub use category::{CategoryRegistry, DEFAULT_CATEGORIES};
pub use expense::{ExpenseLedger, ExpenseRecord};
pub use money::Money;
pub use period::{Granularity, Period};
