//! Dashboard Summary
//!
//! The month-at-a-glance view: headline totals, where the money went,
//! budget progress and the latest expenses.

use tracing::debug;

use crate::models::{Expense, Money, Month, Snapshot};
use crate::query::recent_expenses;

use super::budget_usage::{BudgetLine, BudgetOverview, BudgetUsage};
use super::category_totals::CategoryTotals;

/// One slice of the spending-share chart
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingShare {
    pub name: String,
    pub color: String,
    pub amount: Money,
    pub percent: f64,
}

/// Everything the dashboard shows for one month
#[derive(Debug, Clone)]
pub struct DashboardSummary<'a> {
    pub month: Month,
    pub total_spent: Money,
    pub total_budget: Money,
    pub transaction_count: usize,
    /// Sum of budgets against the month's spending
    pub budget_usage: BudgetUsage,
    /// Categories with spending, largest first, Unknown included
    pub shares: Vec<SpendingShare>,
    /// Budget vs spent per budget
    pub budgets: Vec<BudgetLine>,
    /// Latest expenses dated within the month
    pub recent: Vec<&'a Expense>,
}

impl<'a> DashboardSummary<'a> {
    /// Summarize `month` from a snapshot, listing up to `recent_limit` recent expenses
    pub fn generate(snapshot: &'a Snapshot, month: Month, recent_limit: usize) -> Self {
        let in_month = snapshot.expenses_in(month);
        let totals = CategoryTotals::generate(in_month.iter().copied(), &snapshot.categories);
        let overview = BudgetOverview::from_totals(snapshot, month, &totals);

        let shares = totals
            .ranked(true)
            .into_iter()
            .map(|row| SpendingShare {
                name: row.name.clone(),
                color: row.color.clone(),
                amount: row.total_amount,
                percent: totals.share_percent(row),
            })
            .collect();

        let recent = recent_expenses(in_month, recent_limit);

        debug!(%month, recent = recent.len(), "built dashboard summary");

        Self {
            month,
            total_spent: totals.overall_total,
            total_budget: overview.total.budget_amount,
            transaction_count: totals.overall_count,
            budget_usage: overview.total,
            shares,
            budgets: overview.lines,
            recent,
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, symbol: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard - {}\n", self.month.label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent:   {:>12}\n",
            self.total_spent.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Budget:  {:>12}\n",
            self.total_budget.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Remaining:     {:>12}  ({} used)\n",
            self.budget_usage.remaining.format_with_symbol(symbol),
            crate::display::format_percentage(self.budget_usage.usage_percent)
        ));
        output.push_str(&format!("Transactions:  {:>12}\n\n", self.transaction_count));

        output.push_str("Spending by Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.shares.is_empty() {
            output.push_str("No spending this month.\n");
        }
        for share in &self.shares {
            output.push_str(&format!(
                "{:<24} {:>12} {:>7}  {}\n",
                crate::display::truncate(&share.name, 24),
                share.amount.format_with_symbol(symbol),
                crate::display::format_percentage(share.percent),
                crate::display::format_bar(share.percent, 100.0, 12)
            ));
        }

        output.push_str("\nBudget vs Spent\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.budgets.is_empty() {
            output.push_str("No budgets set for this month.\n");
        }
        for line in &self.budgets {
            let marker = if line.usage.is_over_budget { " !" } else { "" };
            output.push_str(&format!(
                "{:<24} {:>12} / {:>12}{}\n",
                crate::display::truncate(&line.category_name, 24),
                line.usage.spent.format_with_symbol(symbol),
                line.usage.budget_amount.format_with_symbol(symbol),
                marker
            ));
        }

        output.push_str("\nRecent Expenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("No expenses yet.\n");
        }
        for expense in &self.recent {
            output.push_str(&format!(
                "{:<12} {:<32} {:>12}\n",
                expense.date.format(date_format).to_string(),
                crate::display::truncate(&expense.description, 32),
                expense.amount.format_with_symbol(symbol)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::UNKNOWN_CATEGORY_COLOR;
    use chrono::Datelike;

    fn june() -> Month {
        Month::new(2024, 6).unwrap()
    }

    #[test]
    fn test_dashboard_totals() {
        let snapshot = fixtures::snapshot();
        let summary = DashboardSummary::generate(&snapshot, june(), 5);

        assert_eq!(summary.total_spent, Money::from_cents(67899));
        assert_eq!(summary.total_budget, Money::from_cents(320000));
        assert_eq!(summary.transaction_count, 10);
        assert_eq!(summary.budgets.len(), 8);
        assert_eq!(summary.recent.len(), 5);
        assert_eq!(summary.recent[0].description, "Lunch at restaurant");
    }

    #[test]
    fn test_recent_stays_within_month() {
        let mut snapshot = fixtures::snapshot();
        snapshot.expenses.push(fixtures::expense(
            "11",
            2000,
            "Train to the coast",
            "2",
            fixtures::date(2024, 7, 3),
        ));

        let summary = DashboardSummary::generate(&snapshot, june(), 5);
        assert_eq!(summary.recent.len(), 5);
        assert!(summary.recent.iter().all(|e| e.date.month() == 6));
        assert_eq!(summary.recent[0].description, "Lunch at restaurant");

        let july = DashboardSummary::generate(&snapshot, june().next(), 5);
        assert_eq!(july.recent.len(), 1);
        assert_eq!(july.recent[0].description, "Train to the coast");
    }

    #[test]
    fn test_shares_exclude_empty_categories() {
        let snapshot = fixtures::snapshot();
        let summary = DashboardSummary::generate(&snapshot, june(), 5);

        // Travel and Education have no spending in June
        assert_eq!(summary.shares.len(), 6);
        assert_eq!(summary.shares[0].name, "Shopping");
        let share_sum: f64 = summary.shares.iter().map(|s| s.percent).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_include_unknown() {
        let mut snapshot = fixtures::snapshot();
        snapshot.expenses.push(fixtures::expense(
            "11",
            99999,
            "Mystery",
            "42",
            fixtures::date(2024, 6, 1),
        ));
        let summary = DashboardSummary::generate(&snapshot, june(), 5);
        assert_eq!(summary.shares[0].name, "Unknown");
        assert_eq!(summary.shares[0].color, UNKNOWN_CATEGORY_COLOR);
    }

    #[test]
    fn test_empty_month() {
        let snapshot = fixtures::snapshot();
        let summary = DashboardSummary::generate(&snapshot, Month::new(2024, 1).unwrap(), 5);
        assert_eq!(summary.total_spent, Money::zero());
        assert!(summary.shares.is_empty());
        assert!(summary.budgets.is_empty());
        assert_eq!(summary.budget_usage.usage_percent, 0.0);

        let output = summary.format_terminal("$", "%Y-%m-%d");
        assert!(output.contains("No spending this month."));
        assert!(output.contains("No budgets set for this month."));
    }
}
