//! Expense model
//!
//! An expense is a single outflow recorded against one category on a calendar
//! date. Amounts are always positive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId, UserId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Category this expense is filed under; may reference a deleted category
    pub category_id: CategoryId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// The user who owns this expense
    #[serde(rename = "userId", alias = "ownerId")]
    pub owner_id: UserId,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category_id: CategoryId,
        date: NaiveDate,
        owner_id: UserId,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            description: description.into(),
            category_id,
            date,
            owner_id,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.description, self.amount)
    }
}

/// An expense as entered by the user, before the storage service accepts it
///
/// Every field is optional because the form may be submitted half-filled;
/// [`ExpenseDraft::validate`] rejects anything incomplete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Option<Money>,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub date: Option<NaiveDate>,
}

/// Body sent to the storage service for a validated draft
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload<'a> {
    pub amount: Money,
    pub description: &'a str,
    pub category_id: &'a CategoryId,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Parse the amount as typed by the user (e.g. "45.50" or "$45.50")
    pub fn parse_amount(input: &str) -> Result<Money, ExpenseValidationError> {
        if input.trim().is_empty() {
            return Err(ExpenseValidationError::MissingAmount);
        }
        Money::parse(input).map_err(|_| ExpenseValidationError::InvalidAmount(input.to_string()))
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        let amount = self.amount.ok_or(ExpenseValidationError::MissingAmount)?;
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::MissingDescription);
        }

        match &self.category_id {
            Some(id) if !id.as_str().trim().is_empty() => {}
            _ => return Err(ExpenseValidationError::MissingCategory),
        }

        if self.date.is_none() {
            return Err(ExpenseValidationError::MissingDate);
        }

        Ok(())
    }

    /// Validate and produce the request body
    pub fn to_payload(&self) -> Result<ExpensePayload<'_>, ExpenseValidationError> {
        self.validate()?;
        match (self.amount, &self.category_id, self.date) {
            (Some(amount), Some(category_id), Some(date)) => Ok(ExpensePayload {
                amount,
                description: self.description.trim(),
                category_id,
                date,
            }),
            (None, _, _) => Err(ExpenseValidationError::MissingAmount),
            (_, None, _) => Err(ExpenseValidationError::MissingCategory),
            (_, _, None) => Err(ExpenseValidationError::MissingDate),
        }
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            amount: Some(expense.amount),
            description: expense.description.clone(),
            category_id: Some(expense.category_id.clone()),
            date: Some(expense.date),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingAmount,
    InvalidAmount(String),
    NonPositiveAmount,
    MissingDescription,
    MissingCategory,
    MissingDate,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAmount => write!(f, "Amount is required"),
            Self::InvalidAmount(s) => write!(f, "Invalid amount: {}", s),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::MissingDescription => write!(f, "Description is required"),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::MissingDate => write!(f, "Date is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
