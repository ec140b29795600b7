//! Expense filtering: free-text search and category selection

use std::fmt;
use std::str::FromStr;

use crate::models::{CategoryId, Expense};

/// Category selection for an expense view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only expenses with exactly this category id
    Only(CategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => &expense.category_id == id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// "all" (or an empty value) disables the filter; anything else is an id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(CategoryId::from(s)))
        }
    }
}

/// Filter options for an expense view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of the description; empty matches everything
    pub search: String,
    pub category: CategoryFilter,
}

impl ExpenseFilter {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Build a matcher that lowercases the search term once
    pub(crate) fn matcher(&self) -> impl Fn(&Expense) -> bool + '_ {
        let needle = self.search.to_lowercase();
        move |expense: &Expense| {
            self.category.matches(expense)
                && (needle.is_empty() || expense.description.to_lowercase().contains(&needle))
        }
    }

    /// Check if an expense matches this filter
    pub fn matches(&self, expense: &Expense) -> bool {
        (self.matcher())(expense)
    }
}
