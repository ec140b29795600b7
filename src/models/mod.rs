//! Core data models for Pocketbook
//!
//! This module contains the entities fetched from the storage service
//! (categories, expenses, budgets), the snapshot that bundles them, and the
//! value types they are built from.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod snapshot;

pub use budget::{Budget, BudgetDraft, BudgetValidationError};
pub use category::{
    Category, CategoryDraft, CategoryIndex, CategoryValidationError, ResolvedCategory,
    DEFAULT_CATEGORY_COLOR, PALETTE, UNKNOWN_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME,
};
pub use expense::{Expense, ExpenseDraft, ExpensePayload, ExpenseValidationError};
pub use ids::{BudgetId, CategoryId, ExpenseId, UserId};
pub use money::Money;
pub use period::Month;
pub use snapshot::{Snapshot, SnapshotWindow};
