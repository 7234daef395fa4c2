//! Expense record and ledger models
//!
//! An expense is immutable once recorded; the ledger is an insertion-ordered,
//! append-only sequence of records scoped to one session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Amount spent; never negative once stored
    pub amount: Money,

    /// Category name; must be registered in the session's registry
    pub category: String,

    /// Free-form description; empty string means none
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// The description, if one was given
    pub fn description(&self) -> Option<&str> {
        if self.description.is_empty() {
            None
        } else {
            Some(self.description.as_str())
        }
    }

    /// Validate the record's local invariants
    ///
    /// Registry membership of the category is checked at the session
    /// boundary, which has the registry in hand.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.amount, self.category)
    }
}

/// The append-only expense collection for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving insertion order
    pub fn append(&mut self, record: ExpenseRecord) -> &ExpenseRecord {
        self.records.push(record);
        self.records.last().unwrap()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record() {
        let record = ExpenseRecord::new(
            date(2026, 8, 8),
            Money::from_rupees(250),
            "Groceries",
            "weekly shop",
        );

        assert_eq!(record.amount.paise(), 25000);
        assert_eq!(record.category, "Groceries");
        assert_eq!(record.description(), Some("weekly shop"));
    }

    #[test]
    fn test_empty_description_is_none() {
        let record = ExpenseRecord::new(date(2026, 8, 8), Money::zero(), "Other", "");
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_validation() {
        let mut record =
            ExpenseRecord::new(date(2026, 8, 8), Money::from_rupees(100), "Health", "");
        assert!(record.validate().is_ok());

        record.amount = Money::from_paise(-1);
        assert_eq!(
            record.validate(),
            Err(ExpenseValidationError::NegativeAmount)
        );

        record.amount = Money::zero();
        record.category = "  ".into();
        assert_eq!(record.validate(), Err(ExpenseValidationError::EmptyCategory));
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let record = ExpenseRecord::new(date(2026, 8, 8), Money::zero(), "Other", "");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_ledger_append_order() {
        let mut ledger = ExpenseLedger::new();
        assert!(ledger.is_empty());

        ledger.append(ExpenseRecord::new(
            date(2026, 8, 2),
            Money::from_rupees(50),
            "Transportation",
            "",
        ));
        ledger.append(ExpenseRecord::new(
            date(2026, 8, 1),
            Money::from_rupees(120),
            "Groceries",
            "",
        ));

        // Insertion order, not date order
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].category, "Transportation");
        assert_eq!(ledger.records()[1].category, "Groceries");
    }

    #[test]
    fn test_serialization() {
        let record = ExpenseRecord::new(
            date(2026, 8, 8),
            Money::from_paise(25050),
            "Food & Drinks",
            "lunch",
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
