//! Sample snapshot shared by unit tests: one user's June 2024.

use chrono::NaiveDate;

use crate::models::{
    Budget, BudgetId, Category, CategoryId, Expense, ExpenseId, Money, Snapshot, UserId,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn category(id: &str, name: &str, color: &str, budget_dollars: i64) -> Category {
    Category {
        id: CategoryId::from(id),
        name: name.to_string(),
        color: color.to_string(),
        budget: Some(Money::from_dollars_cents(budget_dollars, 0)),
    }
}

pub fn expense(
    id: &str,
    cents: i64,
    description: &str,
    category_id: &str,
    on: NaiveDate,
) -> Expense {
    Expense {
        id: ExpenseId::from(id),
        amount: Money::from_cents(cents),
        description: description.to_string(),
        category_id: CategoryId::from(category_id),
        date: on,
        owner_id: UserId::from("1"),
    }
}

pub fn budget(id: &str, category_id: &str, dollars: i64, year: i32, month: u32) -> Budget {
    Budget {
        id: BudgetId::from(id),
        category_id: CategoryId::from(category_id),
        amount: Money::from_dollars_cents(dollars, 0),
        year,
        month,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category("1", "Food & Dining", "#ef4444", 600),
        category("2", "Transportation", "#3b82f6", 400),
        category("3", "Shopping", "#8b5cf6", 300),
        category("4", "Entertainment", "#f59e0b", 200),
        category("5", "Bills & Utilities", "#10b981", 800),
        category("6", "Healthcare", "#06b6d4", 150),
        category("7", "Travel", "#84cc16", 500),
        category("8", "Education", "#ec4899", 250),
    ]
}

pub fn expenses() -> Vec<Expense> {
    vec![
        expense("1", 4550, "Lunch at restaurant", "1", date(2024, 6, 15)),
        expense("2", 2500, "Gas station", "2", date(2024, 6, 14)),
        expense("3", 12000, "Grocery shopping", "1", date(2024, 6, 13)),
        expense("4", 1599, "Netflix subscription", "4", date(2024, 6, 12)),
        expense("5", 8500, "Electric bill", "5", date(2024, 6, 11)),
        expense("6", 20000, "New shoes", "3", date(2024, 6, 10)),
        expense("7", 3000, "Doctor visit", "6", date(2024, 6, 9)),
        expense("8", 7500, "Concert tickets", "4", date(2024, 6, 8)),
        expense("9", 1250, "Coffee", "1", date(2024, 6, 7)),
        expense("10", 4000, "Uber ride", "2", date(2024, 6, 6)),
    ]
}

pub fn budgets() -> Vec<Budget> {
    vec![
        budget("1", "1", 600, 2024, 6),
        budget("2", "2", 400, 2024, 6),
        budget("3", "3", 300, 2024, 6),
        budget("4", "4", 200, 2024, 6),
        budget("5", "5", 800, 2024, 6),
        budget("6", "6", 150, 2024, 6),
        budget("7", "7", 500, 2024, 6),
        budget("8", "8", 250, 2024, 6),
    ]
}

pub fn snapshot() -> Snapshot {
    Snapshot::new(categories(), expenses(), budgets())
}

/// The three-expense scenario: two Food & Dining, one Entertainment
pub fn small_snapshot() -> Snapshot {
    Snapshot::new(
        categories(),
        vec![
            expense("1", 4550, "Lunch at restaurant", "1", date(2024, 6, 15)),
            expense("3", 12000, "Grocery shopping", "1", date(2024, 6, 13)),
            expense("4", 1599, "Netflix subscription", "4", date(2024, 6, 12)),
        ],
        vec![budget("1", "1", 600, 2024, 6)],
    )
}
