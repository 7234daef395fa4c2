//! FinSmart - Terminal personal-finance manager
//!
//! This library provides the core functionality for FinSmart: an in-memory
//! expense ledger with category budgets, investment-growth projections, and
//! a weekly spending planner, plus the CSV interchange format that carries a
//! ledger between CLI invocations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, categories, budgets, periods)
//! - `session`: The mutable per-session context and its mutation boundary
//! - `query`: Pure filter/aggregate functions over expense records
//! - `invest`: SIP and lump-sum projection math with inflation adjustment
//! - `planner`: Weekly discretionary-spending planner
//! - `reports`: Derived read models (dashboard, budget overview)
//! - `export`: CSV and JSON serialization of the ledger
//! - `display`: Terminal formatting
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust
//! use finsmart::models::Money;
//! use finsmart::session::Session;
//! use chrono::NaiveDate;
//!
//! let mut session = Session::new();
//! session.add_expense(
//!     NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
//!     Money::from_rupees(250),
//!     "Groceries",
//!     "weekly shop",
//! ).unwrap();
//! assert_eq!(session.records().len(), 1);
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod invest;
pub mod models;
pub mod planner;
pub mod query;
pub mod reports;
pub mod session;

pub use error::{FinSmartError, FinSmartResult};
pub use session::Session;
