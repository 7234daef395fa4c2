//! Session context
//!
//! One `Session` owns all mutable state for one user: the expense ledger,
//! the category registry, and the budget book. Every mutation goes through
//! here so cross-entity invariants hold: expense categories are always
//! registered, budget keys are always registered, and a failed validation
//! leaves nothing half-applied.

use chrono::NaiveDate;

use crate::error::{FinSmartError, FinSmartResult};
use crate::models::{BudgetBook, CategoryRegistry, ExpenseLedger, ExpenseRecord, Money};

/// In-memory state for one user session
///
/// Created empty at session start, mutated in place, discarded at session
/// end. There is no ambient or global storage.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: ExpenseLedger,
    categories: CategoryRegistry,
    budgets: BudgetBook,
}

impl Session {
    /// Create a session with an empty ledger and the default categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from previously exported records
    ///
    /// Categories seen in the records are registered (the export may contain
    /// custom categories from an earlier session), then each record is
    /// appended. Any invalid record aborts the whole restore.
    pub fn restore(records: Vec<ExpenseRecord>) -> FinSmartResult<Self> {
        let mut session = Self::new();
        for record in records {
            session
                .categories
                .register(record.category.clone())
                .map_err(|e| FinSmartError::Validation(e.to_string()))?;
            session.append_validated(record)?;
        }
        Ok(session)
    }

    /// Record a new expense
    ///
    /// Fails if the amount is negative or the category is not registered;
    /// on failure the ledger is untouched.
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> FinSmartResult<&ExpenseRecord> {
        let category = category.into();
        if !self.categories.contains(&category) {
            return Err(FinSmartError::unknown_category(category));
        }
        self.append_validated(ExpenseRecord::new(date, amount, category, description))
    }

    /// Register a category name (idempotent)
    pub fn register_category(&mut self, name: impl Into<String>) -> FinSmartResult<()> {
        self.categories
            .register(name)
            .map_err(|e| FinSmartError::Validation(e.to_string()))
    }

    /// Set the budget limit for a category
    ///
    /// A new category is registered first, then the limit is set; a negative
    /// amount is rejected before either happens, so there is never a
    /// registered category with a failed allocation.
    pub fn set_budget(&mut self, category: impl Into<String>, amount: Money) -> FinSmartResult<()> {
        let category = category.into();
        if amount.is_negative() {
            return Err(FinSmartError::negative_amount("Budget amount"));
        }
        self.categories
            .register(category.clone())
            .map_err(|e| FinSmartError::Validation(e.to_string()))?;
        self.budgets
            .set(category, amount)
            .map_err(|e| FinSmartError::Validation(e.to_string()))
    }

    /// The expense ledger
    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    /// The category registry
    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    /// The budget book
    pub fn budgets(&self) -> &BudgetBook {
        &self.budgets
    }

    fn append_validated(&mut self, record: ExpenseRecord) -> FinSmartResult<&ExpenseRecord> {
        record
            .validate()
            .map_err(|e| FinSmartError::Validation(e.to_string()))?;
        Ok(self.ledger.append(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_expense() {
        let mut session = Session::new();
        let record = session
            .add_expense(date(2026, 8, 8), Money::from_rupees(250), "Groceries", "")
            .unwrap();

        assert_eq!(record.amount, Money::from_rupees(250));
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_add_expense_unknown_category() {
        let mut session = Session::new();
        let err = session
            .add_expense(date(2026, 8, 8), Money::from_rupees(250), "Gadgets", "")
            .unwrap_err();

        assert!(err.is_validation());
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_add_expense_negative_amount() {
        let mut session = Session::new();
        let err = session
            .add_expense(date(2026, 8, 8), Money::from_paise(-1), "Groceries", "")
            .unwrap_err();

        assert!(err.is_validation());
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_add_after_registering() {
        let mut session = Session::new();
        session.register_category("Gadgets").unwrap();
        session
            .add_expense(date(2026, 8, 8), Money::from_rupees(999), "Gadgets", "")
            .unwrap();

        assert_eq!(session.records()[0].category, "Gadgets");
    }

    #[test]
    fn test_set_budget_registers_new_category() {
        let mut session = Session::new();
        session
            .set_budget("Travel", Money::from_rupees(5000))
            .unwrap();

        assert!(session.categories().contains("Travel"));
        assert_eq!(
            session.budgets().get("Travel"),
            Some(Money::from_rupees(5000))
        );
    }

    #[test]
    fn test_set_budget_idempotent() {
        let mut session = Session::new();
        session
            .set_budget("Travel", Money::from_rupees(5000))
            .unwrap();
        let categories_before = session.categories().len();

        session
            .set_budget("Travel", Money::from_rupees(5000))
            .unwrap();

        assert_eq!(session.categories().len(), categories_before);
        assert_eq!(session.budgets().len(), 1);
    }

    #[test]
    fn test_set_budget_negative_rejects_before_registering() {
        let mut session = Session::new();
        let err = session
            .set_budget("Travel", Money::from_paise(-1))
            .unwrap_err();

        assert!(err.is_validation());
        // No partial application: the category was not registered
        assert!(!session.categories().contains("Travel"));
        assert!(session.budgets().is_empty());
    }

    #[test]
    fn test_restore_round_trip_state() {
        let mut original = Session::new();
        original.register_category("Gadgets").unwrap();
        original
            .add_expense(date(2026, 8, 1), Money::from_rupees(120), "Groceries", "veg")
            .unwrap();
        original
            .add_expense(date(2026, 8, 2), Money::from_rupees(999), "Gadgets", "")
            .unwrap();

        let restored = Session::restore(original.records().to_vec()).unwrap();
        assert_eq!(restored.records(), original.records());
        assert!(restored.categories().contains("Gadgets"));
    }

    #[test]
    fn test_restore_rejects_bad_record() {
        let records = vec![ExpenseRecord::new(
            date(2026, 8, 1),
            Money::from_paise(-100),
            "Groceries",
            "",
        )];
        assert!(Session::restore(records).is_err());
    }
}
