//! Reports module for Pocketbook
//!
//! Pure computations over a snapshot: category totals, budget usage,
//! monthly spending trends and the dashboard summary.

pub mod budget_usage;
pub mod category_totals;
pub mod dashboard;
pub mod trends;

pub use budget_usage::{BudgetLine, BudgetOverview, BudgetUsage};
pub use category_totals::{CategoryKey, CategoryTotal, CategoryTotals};
pub use dashboard::{DashboardSummary, SpendingShare};
pub use trends::{MonthlyBucket, SpendingTrend, TimeRange};
