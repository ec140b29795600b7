//! Sort keys, directions and the column-header toggle state

use std::fmt;
use std::str::FromStr;

/// Column an expense view can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Description,
    Category,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
            Self::Description => write!(f, "description"),
            Self::Category => write!(f, "category"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" => Ok(Self::Description),
            "category" => Ok(Self::Category),
            other => Err(format!(
                "Invalid sort key '{}'. Use date, amount, description or category",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("Invalid sort direction '{}'. Use asc or desc", other)),
        }
    }
}

/// Active sort column and direction; starts at date, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// State after clicking the `clicked` column header
    ///
    /// Clicking the active column flips the direction; clicking another
    /// column selects it in descending order.
    pub fn toggle(self, clicked: SortKey) -> Self {
        if clicked == self.key {
            Self {
                key: self.key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key: clicked,
                direction: SortDirection::Descending,
            }
        }
    }
}
