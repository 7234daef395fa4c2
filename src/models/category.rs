//! Category registry
//!
//! Categories are plain names drawn from an open set: the registry starts
//! with ten predefined names and grows as the user adds custom ones. It is
//! append-only and keeps first-seen order for display and reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The predefined categories every session starts with
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Drinks",
    "Groceries",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills & Utilities",
    "Education",
    "Housing & Rent",
    "Health",
    "Other",
];

/// An ordered, append-only set of category names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Create a registry seeded with the default categories
    pub fn with_defaults() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Check whether a category name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Register a category name, keeping first-seen order
    ///
    /// Registering an existing name is a no-op. Blank names are rejected.
    pub fn register(&mut self, name: impl Into<String>) -> Result<(), CategoryValidationError> {
        let name = name.into();
        validate_name(&name)?;
        if !self.contains(&name) {
            self.names.push(name);
        }
        Ok(())
    }

    /// Iterate over registered names in registration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Validate a category name
pub fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if name.len() > 50 {
        return Err(CategoryValidationError::NameTooLong(name.len()));
    }

    Ok(())
}

/// Validation errors for category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
