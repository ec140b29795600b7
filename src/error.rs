//! Custom error types for Pocketbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Report generation itself never fails; these
//! errors come from validation, configuration, snapshot loading and export.

use thiserror::Error;

use crate::models::{BudgetValidationError, CategoryValidationError, ExpenseValidationError};

/// The main error type for Pocketbook operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for drafts submitted by the user
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Snapshot fetch failures (file or remote service)
    #[error("Snapshot source error: {0}")]
    Source(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PocketbookError {
    /// Create a "not found" error for snapshots
    pub fn snapshot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Snapshot",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PocketbookError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<ExpenseValidationError> for PocketbookError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CategoryValidationError> for PocketbookError {
    fn from(err: CategoryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<BudgetValidationError> for PocketbookError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for Pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PocketbookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PocketbookError::snapshot_not_found("data/snapshot.json");
        assert_eq!(err.to_string(), "Snapshot not found: data/snapshot.json");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PocketbookError = io_err.into();
        assert!(matches!(err, PocketbookError::Io(_)));
    }

    #[test]
    fn test_from_validation_errors() {
        let err: PocketbookError = ExpenseValidationError::NonPositiveAmount.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Amount must be greater than 0");

        let err: PocketbookError = BudgetValidationError::NegativeBudget.into();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PocketbookError = json_err.into();
        assert!(matches!(err, PocketbookError::Json(_)));
    }
}
