//! Custom error types for FinSmart
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinSmart operations
#[derive(Error, Debug)]
pub enum FinSmartError {
    /// Validation errors raised at the mutation boundary: negative amounts,
    /// unregistered categories, unparseable dates, bad planner distributions.
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors (CLI layer only; the engine itself does no I/O)
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed CSV structure during ledger import
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization errors during export
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinSmartError {
    /// Create a validation error for a negative amount
    pub fn negative_amount(what: &str) -> Self {
        Self::Validation(format!("{} cannot be negative", what))
    }

    /// Create a validation error for a category missing from the registry
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::Validation(format!("Category is not registered: {}", name.into()))
    }

    /// Create a validation error for an unparseable date
    pub fn bad_date(text: impl Into<String>) -> Self {
        Self::Validation(format!("Invalid date: {}", text.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinSmartError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for FinSmartError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for FinSmartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinSmart operations
pub type FinSmartResult<T> = Result<T, FinSmartError>;
