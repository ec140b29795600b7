//! Budget model
//!
//! A budget caps spending for one category in one calendar month. The storage
//! service guarantees at most one budget per (category, month); the engine
//! relies on that but does not check it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::period::Month;

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this budget is for
    pub category_id: CategoryId,

    /// Budgeted amount for the month (never negative)
    pub amount: Money,

    /// Budget year, e.g. 2024
    pub year: i32,

    /// Budget month, 1 for January through 12 for December
    pub month: u32,
}

impl Budget {
    /// Create a new budget with a fresh id
    pub fn new(category_id: CategoryId, period: Month, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category_id,
            amount,
            year: period.year,
            month: period.month,
        }
    }

    /// The month this budget covers
    pub fn period(&self) -> Month {
        Month {
            year: self.year,
            month: self.month,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budgeted: {}", self.period(), self.amount)
    }
}

/// A budget amount edit, before the storage service accepts it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetDraft {
    pub amount: Money,
}

impl BudgetDraft {
    pub fn new(amount: Money) -> Self {
        Self { amount }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }

        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let june = Month::new(2024, 6).unwrap();
        let budget = Budget::new(CategoryId::from("1"), june, Money::from_cents(60000));
        assert_eq!(budget.period(), june);
        assert_eq!(budget.to_string(), "2024-06 budgeted: $600.00");
    }

    #[test]
    fn test_draft_validation() {
        assert!(BudgetDraft::new(Money::zero()).validate().is_ok());
        assert!(BudgetDraft::new(Money::from_cents(25000)).validate().is_ok());
        assert_eq!(
            BudgetDraft::new(Money::from_cents(-1)).validate(),
            Err(BudgetValidationError::NegativeBudget)
        );
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{"id":1,"categoryId":1,"amount":600,"year":2024,"month":6}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.amount, Money::from_cents(60000));
        assert_eq!(budget.period(), Month::new(2024, 6).unwrap());
    }
}
