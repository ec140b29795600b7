//! Budget Usage
//!
//! Compares a budget with what was spent against it. Usage is reported both
//! raw (can exceed 100%) and clamped for progress bars; a zero budget is
//! 0% used and over budget as soon as anything is spent.

use tracing::debug;

use crate::models::{Budget, BudgetId, Money, Month, Snapshot, UNKNOWN_CATEGORY_NAME};

use super::category_totals::CategoryTotals;

/// Spend measured against a budget amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    pub budget_amount: Money,
    pub spent: Money,
    /// budget - spent, negative when over budget
    pub remaining: Money,
    /// spent / budget * 100; zero when the budget is zero
    pub usage_percent: f64,
    /// usage_percent capped at 100, for bounded progress indicators
    pub display_percent: f64,
    pub is_over_budget: bool,
}

impl BudgetUsage {
    /// Compute usage for a budget amount and the spend against it
    pub fn calculate(budget_amount: Money, spent: Money) -> Self {
        let usage_percent = spent.percent_of(budget_amount);
        Self {
            budget_amount,
            spent,
            remaining: budget_amount - spent,
            usage_percent,
            display_percent: usage_percent.min(100.0),
            is_over_budget: spent > budget_amount,
        }
    }

    /// Usage for a budget record
    pub fn for_budget(budget: &Budget, spent: Money) -> Self {
        Self::calculate(budget.amount, spent)
    }

    /// How far spending exceeds the budget, if it does
    pub fn over_budget_by(&self) -> Option<Money> {
        if self.is_over_budget {
            Some(self.spent - self.budget_amount)
        } else {
            None
        }
    }
}

/// One budget card: the budget, its category and its usage
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub budget_id: BudgetId,
    pub category_name: String,
    pub category_color: String,
    /// False when the budget's category is missing from the snapshot
    pub category_known: bool,
    pub usage: BudgetUsage,
}

/// All budgets for a month with their usage and the aggregate usage
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    pub month: Month,
    /// One line per budget, in snapshot order
    pub lines: Vec<BudgetLine>,
    /// Sum of all budgets against all spending in the month
    pub total: BudgetUsage,
}

impl BudgetOverview {
    /// Build the overview for `month` from a snapshot
    pub fn generate(snapshot: &Snapshot, month: Month) -> Self {
        let expenses = snapshot.expenses_in(month);
        let totals = CategoryTotals::generate(expenses, &snapshot.categories);
        Self::from_totals(snapshot, month, &totals)
    }

    /// Build the overview from totals already aggregated over `month`'s expenses
    pub fn from_totals(snapshot: &Snapshot, month: Month, totals: &CategoryTotals) -> Self {
        let index = snapshot.category_index();

        let lines: Vec<BudgetLine> = snapshot
            .budgets_for(month)
            .into_iter()
            .map(|budget| {
                let category = index.resolve(&budget.category_id);
                BudgetLine {
                    budget_id: budget.id.clone(),
                    category_name: category.name().to_string(),
                    category_color: category.color().to_string(),
                    category_known: category.is_known(),
                    usage: BudgetUsage::for_budget(budget, totals.spent_for(&budget.category_id)),
                }
            })
            .collect();

        let total_budget = lines.iter().map(|line| line.usage.budget_amount).sum();
        let total = BudgetUsage::calculate(total_budget, totals.overall_total);

        debug!(%month, budgets = lines.len(), "computed budget overview");

        Self { month, lines, total }
    }

    /// Lines that are over budget
    pub fn over_budget(&self) -> Vec<&BudgetLine> {
        self.lines
            .iter()
            .filter(|line| line.usage.is_over_budget)
            .collect()
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Overview - {}\n", self.month.label()));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Total Budget: {}  Spent: {}  Remaining: {}  ({:.1}% used)\n\n",
            self.total.budget_amount.format_with_symbol(symbol),
            self.total.spent.format_with_symbol(symbol),
            self.total.remaining.format_with_symbol(symbol),
            self.total.usage_percent
        ));

        output.push_str(&format!(
            "{:<24} {:>11} {:>11} {:>11} {:>7}  {}\n",
            "Category", "Budget", "Spent", "Remaining", "Used", "Progress"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for line in &self.lines {
            let name = if line.category_known {
                line.category_name.clone()
            } else {
                format!("{} *", UNKNOWN_CATEGORY_NAME)
            };
            output.push_str(&format!(
                "{:<24} {:>11} {:>11} {:>11} {:>6.1}%  {}\n",
                name,
                line.usage.budget_amount.format_with_symbol(symbol),
                line.usage.spent.format_with_symbol(symbol),
                line.usage.remaining.format_with_symbol(symbol),
                line.usage.usage_percent,
                crate::display::format_bar(line.usage.display_percent, 100.0, 10)
            ));
            if let Some(over) = line.usage.over_budget_by() {
                output.push_str(&format!(
                    "  Over budget by {}\n",
                    over.format_with_symbol(symbol)
                ));
            }
        }

        if self.lines.iter().any(|line| !line.category_known) {
            output.push_str("\n* = category no longer exists\n");
        }

        output
    }
}
