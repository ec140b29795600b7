//! Point-in-time collections of categories, expenses and budgets
//!
//! A snapshot is what the fetch layer hands to the reports. It is never
//! mutated; narrowing it to a window produces a new snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::category::{Category, CategoryIndex};
use super::expense::Expense;
use super::period::Month;

/// The date range and budget month a snapshot was fetched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotWindow {
    /// First day of the expense window (inclusive)
    pub start: NaiveDate,
    /// Last day of the expense window (inclusive)
    pub end: NaiveDate,
    /// Month whose budgets are included
    pub budget_month: Month,
}

impl SnapshotWindow {
    /// A window covering exactly one month of expenses and its budgets
    pub fn month(month: Month) -> Self {
        Self {
            start: month.start_date(),
            end: month.end_date(),
            budget_month: month,
        }
    }

    /// A window spanning whole months from `first` through `last`, with budgets from `last`
    pub fn months(first: Month, last: Month) -> Self {
        Self {
            start: first.start_date(),
            end: last.end_date(),
            budget_month: last,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Immutable collections of entities for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    pub fn new(categories: Vec<Category>, expenses: Vec<Expense>, budgets: Vec<Budget>) -> Self {
        Self {
            categories,
            expenses,
            budgets,
        }
    }

    /// Build an id lookup over this snapshot's categories
    pub fn category_index(&self) -> CategoryIndex<'_> {
        CategoryIndex::new(&self.categories)
    }

    /// Expenses dated within `month`, in snapshot order
    pub fn expenses_in(&self, month: Month) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .collect()
    }

    /// Budgets set for `month`, in snapshot order
    pub fn budgets_for(&self, month: Month) -> Vec<&Budget> {
        self.budgets
            .iter()
            .filter(|b| b.period() == month)
            .collect()
    }

    /// Narrow to what the storage service would return for `window`
    ///
    /// Categories are not time-bound and are kept whole.
    pub fn restrict(&self, window: &SnapshotWindow) -> Snapshot {
        Snapshot {
            categories: self.categories.clone(),
            expenses: self
                .expenses
                .iter()
                .filter(|e| window.contains(e.date))
                .cloned()
                .collect(),
            budgets: self
                .budgets
                .iter()
                .filter(|b| b.period() == window.budget_month)
                .cloned()
                .collect(),
        }
    }
}
