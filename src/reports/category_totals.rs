//! Category Totals
//!
//! Groups expenses by category into totals, counts and averages. Expenses
//! whose category is missing from the snapshot are gathered under a single
//! synthetic "Unknown" row instead of being dropped.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::models::{
    Category, CategoryId, CategoryIndex, Expense, Money, UNKNOWN_CATEGORY_COLOR,
    UNKNOWN_CATEGORY_NAME,
};

/// Which group a totals row belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    /// A category present in the snapshot
    Known(CategoryId),
    /// Every expense whose category could not be resolved
    Unknown,
}

/// Aggregated spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub key: CategoryKey,
    /// Category name ("Unknown" for the synthetic row)
    pub name: String,
    /// Display color
    pub color: String,
    /// Sum of expense amounts
    pub total_amount: Money,
    /// Number of expenses
    pub transaction_count: usize,
    /// total / count, rounded to the cent; zero when there are no expenses
    pub average_amount: Money,
}

impl CategoryTotal {
    fn new(key: CategoryKey, name: &str, color: &str, total: Money, count: usize) -> Self {
        Self {
            key,
            name: name.to_string(),
            color: color.to_string(),
            total_amount: total,
            transaction_count: count,
            average_amount: total.div_round(count),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.key == CategoryKey::Unknown
    }

    /// The category id, `None` for the Unknown row
    pub fn category_id(&self) -> Option<&CategoryId> {
        match &self.key {
            CategoryKey::Known(id) => Some(id),
            CategoryKey::Unknown => None,
        }
    }
}

/// Spending totals per category plus overall figures
#[derive(Debug, Clone, Default)]
pub struct CategoryTotals {
    /// One row per listed category in list order, then the Unknown row if any
    pub rows: Vec<CategoryTotal>,
    /// Sum over all expenses
    pub overall_total: Money,
    /// Number of expenses
    pub overall_count: usize,
    /// Distinct category ids that could not be resolved, in first-seen order
    pub unresolved_ids: Vec<CategoryId>,
    spent_by_id: HashMap<CategoryId, Money>,
}

impl CategoryTotals {
    /// Aggregate `expenses` against the category list
    pub fn generate<'a, I>(expenses: I, categories: &[Category]) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let index = CategoryIndex::new(categories);

        let mut known: HashMap<&CategoryId, (Money, usize)> = HashMap::new();
        let mut spent_by_id: HashMap<CategoryId, Money> = HashMap::new();
        let mut unknown_total = Money::zero();
        let mut unknown_count = 0;
        let mut unresolved_ids = Vec::new();
        let mut unresolved_seen = HashSet::new();
        let mut overall_total = Money::zero();
        let mut overall_count = 0;

        for expense in expenses {
            overall_total += expense.amount;
            overall_count += 1;
            *spent_by_id
                .entry(expense.category_id.clone())
                .or_insert_with(Money::zero) += expense.amount;

            match index.get(&expense.category_id) {
                Some(category) => {
                    let entry = known.entry(&category.id).or_insert((Money::zero(), 0));
                    entry.0 += expense.amount;
                    entry.1 += 1;
                }
                None => {
                    unknown_total += expense.amount;
                    unknown_count += 1;
                    if unresolved_seen.insert(&expense.category_id) {
                        unresolved_ids.push(expense.category_id.clone());
                    }
                }
            }
        }

        let mut rows = Vec::with_capacity(categories.len() + 1);
        let mut emitted = HashSet::new();
        for category in categories {
            if !emitted.insert(&category.id) {
                continue;
            }
            let (total, count) = known
                .get(&category.id)
                .copied()
                .unwrap_or((Money::zero(), 0));
            rows.push(CategoryTotal::new(
                CategoryKey::Known(category.id.clone()),
                &category.name,
                &category.color,
                total,
                count,
            ));
        }

        if unknown_count > 0 {
            warn!(
                expenses = unknown_count,
                categories = ?unresolved_ids,
                "expenses reference categories missing from the snapshot"
            );
            rows.push(CategoryTotal::new(
                CategoryKey::Unknown,
                UNKNOWN_CATEGORY_NAME,
                UNKNOWN_CATEGORY_COLOR,
                unknown_total,
                unknown_count,
            ));
        }

        debug!(rows = rows.len(), expenses = overall_count, "aggregated category totals");

        Self {
            rows,
            overall_total,
            overall_count,
            unresolved_ids,
            spent_by_id,
        }
    }

    /// Row for a listed category
    pub fn get(&self, id: &CategoryId) -> Option<&CategoryTotal> {
        self.rows.iter().find(|row| row.category_id() == Some(id))
    }

    /// The synthetic Unknown row, if any expense needed it
    pub fn unknown(&self) -> Option<&CategoryTotal> {
        self.rows.iter().find(|row| row.is_unknown())
    }

    /// Total spent against a category id, whether or not it resolves
    pub fn spent_for(&self, id: &CategoryId) -> Money {
        self.spent_by_id.get(id).copied().unwrap_or_default()
    }

    /// Rows with spending, largest first; ties keep category-list order
    ///
    /// The Unknown row is only included when asked for.
    pub fn ranked(&self, include_unknown: bool) -> Vec<&CategoryTotal> {
        let mut ranked: Vec<_> = self
            .rows
            .iter()
            .filter(|row| row.total_amount.is_positive())
            .filter(|row| include_unknown || !row.is_unknown())
            .collect();
        ranked.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
        ranked
    }

    /// Top spending categories, excluding Unknown
    pub fn top(&self, limit: usize) -> Vec<&CategoryTotal> {
        self.ranked(false).into_iter().take(limit).collect()
    }

    /// A row's total as a percentage of all spending
    pub fn share_percent(&self, row: &CategoryTotal) -> f64 {
        row.total_amount.percent_of(self.overall_total)
    }

    /// Format the category breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str, include_unknown: bool) -> String {
        let mut output = String::new();

        output.push_str("Category Breakdown\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>8} {:>12} {:>8}\n",
            "Category", "Amount", "Count", "Average", "%"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in self.ranked(include_unknown) {
            output.push_str(&format!(
                "{:<28} {:>12} {:>8} {:>12} {:>7.1}%\n",
                row.name,
                row.total_amount.format_with_symbol(symbol),
                row.transaction_count,
                row.average_amount.format_with_symbol(symbol),
                self.share_percent(row)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>8} {:>12}\n",
            "TOTAL",
            self.overall_total.format_with_symbol(symbol),
            self.overall_count,
            self.overall_total
                .div_round(self.overall_count)
                .format_with_symbol(symbol)
        ));

        output
    }
}
