//! Category model and category resolution
//!
//! Every expense points at a category by id. The referenced category may have
//! been deleted since the expense was recorded, so lookups resolve to an
//! explicit [`ResolvedCategory::Unknown`] instead of a missing value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Display name used for expenses whose category no longer exists
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// Neutral color used for the Unknown pseudo-category
pub const UNKNOWN_CATEGORY_COLOR: &str = "#9ca3af";

/// Colors offered when creating a category
pub const PALETTE: [&str; 16] = [
    "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6",
    "#06b6d4", "#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899",
];

/// Default color for a new category
pub const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

const MAX_NAME_LEN: usize = 50;

/// A spending category (e.g., "Food & Dining")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Display color as "#RRGGBB"
    pub color: String,

    /// Default monthly budget for this category (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,
}

impl Category {
    /// Create a new category with a fresh id
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            budget: None,
        }
    }

    /// Create a category with a default monthly budget
    pub fn with_budget(name: impl Into<String>, color: impl Into<String>, budget: Money) -> Self {
        let mut category = Self::new(name, color);
        category.budget = Some(budget);
        category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A category as entered by the user, before the storage service accepts it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,
}

impl CategoryDraft {
    /// Create a draft; the name is trimmed
    pub fn new(name: impl AsRef<str>, color: impl Into<String>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            color: color.into(),
            budget: None,
        }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        if let Some(budget) = self.budget {
            if budget.is_negative() {
                return Err(CategoryValidationError::NegativeBudget);
            }
        }

        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
    NegativeBudget,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::InvalidColor(color) => {
                write!(f, "Category color must be a #RRGGBB value, got '{}'", color)
            }
            Self::NegativeBudget => write!(f, "Default budget cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// The outcome of looking up an expense's category in a snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedCategory<'a> {
    /// The category exists in the snapshot
    Known(&'a Category),
    /// The referenced category is absent (deleted or never fetched)
    Unknown(&'a CategoryId),
}

impl<'a> ResolvedCategory<'a> {
    /// Display name, "Unknown" when unresolved
    pub fn name(&self) -> &'a str {
        match self {
            Self::Known(category) => &category.name,
            Self::Unknown(_) => UNKNOWN_CATEGORY_NAME,
        }
    }

    /// Display color, neutral gray when unresolved
    pub fn color(&self) -> &'a str {
        match self {
            Self::Known(category) => &category.color,
            Self::Unknown(_) => UNKNOWN_CATEGORY_COLOR,
        }
    }

    /// Name used as a sort key; unresolved categories sort as the empty string
    pub fn sort_name(&self) -> &'a str {
        match self {
            Self::Known(category) => &category.name,
            Self::Unknown(_) => "",
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Id-to-category lookup over a category list
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<&'a CategoryId, &'a Category>,
}

impl<'a> CategoryIndex<'a> {
    /// Build an index; on duplicate ids the first category wins
    pub fn new(categories: &'a [Category]) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            by_id.entry(&category.id).or_insert(category);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &CategoryId) -> Option<&'a Category> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Resolve a category reference
    pub fn resolve<'b>(&self, id: &'b CategoryId) -> ResolvedCategory<'b>
    where
        'a: 'b,
    {
        match self.get(id) {
            Some(category) => ResolvedCategory::Known(category),
            None => ResolvedCategory::Unknown(id),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
