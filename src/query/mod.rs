//! Expense queries
//!
//! Filters an expense collection by search text and category, then orders it
//! by one column. Sorting is stable: expenses with equal keys keep their
//! input order, so re-applying a sort never reshuffles ties.

pub mod filter;
pub mod sort;

pub use filter::{CategoryFilter, ExpenseFilter};
pub use sort::{SortDirection, SortKey, SortState};

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Category, CategoryIndex, Expense, Money};

/// A filter plus a sort order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub filter: ExpenseFilter,
    pub sort: SortState,
}

/// Precomputed comparison value for one expense under one sort key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Date(NaiveDate),
    Amount(Money),
    Text(String),
}

impl SortValue {
    fn of(expense: &Expense, key: SortKey, index: &CategoryIndex<'_>) -> Self {
        match key {
            SortKey::Date => Self::Date(expense.date),
            SortKey::Amount => Self::Amount(expense.amount),
            SortKey::Description => Self::Text(expense.description.to_lowercase()),
            SortKey::Category => Self::Text(
                index
                    .resolve(&expense.category_id)
                    .sort_name()
                    .to_lowercase(),
            ),
        }
    }
}

impl ExpenseQuery {
    pub fn new(filter: ExpenseFilter, sort: SortState) -> Self {
        Self { filter, sort }
    }

    /// Run the query over `expenses`, resolving category names from `categories`
    pub fn run<'a>(&self, expenses: &'a [Expense], categories: &[Category]) -> QueryResult<'a> {
        let index = CategoryIndex::new(categories);
        let matches = self.filter.matcher();

        let mut keyed: Vec<(SortValue, &'a Expense)> = expenses
            .iter()
            .filter(|expense| matches(*expense))
            .map(|expense| (SortValue::of(expense, self.sort.key, &index), expense))
            .collect();

        let direction = self.sort.direction;
        keyed.sort_by(|a, b| {
            let ordering = a.0.cmp(&b.0);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let expenses: Vec<&'a Expense> = keyed.into_iter().map(|(_, expense)| expense).collect();
        let total = expenses.iter().map(|expense| expense.amount).sum();

        debug!(
            matched = expenses.len(),
            sort = %self.sort.key,
            direction = %self.sort.direction,
            "ran expense query"
        );

        QueryResult { expenses, total }
    }
}

/// Ordered expenses matching a query, with their summary figures
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub expenses: Vec<&'a Expense>,
    /// Sum of the matched amounts
    pub total: Money,
}

impl<'a> QueryResult<'a> {
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Average matched amount, zero when nothing matched
    pub fn average(&self) -> Money {
        self.total.div_round(self.expenses.len())
    }

    /// Format the result as an expense list for terminal display
    ///
    /// At most `limit` rows are listed; the summary line covers every match.
    pub fn format_terminal(
        &self,
        categories: &[Category],
        symbol: &str,
        date_format: &str,
        limit: Option<usize>,
    ) -> String {
        let index = CategoryIndex::new(categories);
        let mut output = String::new();

        output.push_str(&format!(
            "{:<12} {:<32} {:<20} {:>12}\n",
            "Date", "Description", "Category", "Amount"
        ));
        output.push_str(&"-".repeat(79));
        output.push('\n');

        if self.expenses.is_empty() {
            output.push_str("No expenses found.\n");
        }

        let shown = limit.unwrap_or(self.expenses.len()).min(self.expenses.len());
        for expense in &self.expenses[..shown] {
            output.push_str(&format!(
                "{:<12} {:<32} {:<20} {:>12}\n",
                expense.date.format(date_format).to_string(),
                crate::display::truncate(&expense.description, 32),
                crate::display::truncate(index.resolve(&expense.category_id).name(), 20),
                expense.amount.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(79));
        output.push('\n');
        output.push_str(&format!(
            "{} expense(s)  Total: {}  Average: {}\n",
            self.count(),
            self.total.format_with_symbol(symbol),
            self.average().format_with_symbol(symbol)
        ));
        if shown < self.expenses.len() {
            output.push_str(&format!("(showing {} of {})\n", shown, self.expenses.len()));
        }

        output
    }
}

/// The `limit` most recent expenses, newest first; same-day expenses keep input order
pub fn recent_expenses<'a, I>(expenses: I, limit: usize) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut recent: Vec<&Expense> = expenses.into_iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}
