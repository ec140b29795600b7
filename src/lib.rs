//! Pocketbook - expense tracking reports
//!
//! This library turns a snapshot of one user's categories, expenses and
//! monthly budgets into reports: category totals, budget usage, monthly
//! spending trends, a dashboard summary and CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, months, categories, expenses, budgets)
//! - `reports`: Aggregations over a snapshot
//! - `query`: Expense search, category filter and sorting
//! - `export`: CSV export
//! - `source`: Where snapshots come from (JSON file, storage service API)
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the `pocketbook` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::models::Month;
//! use pocketbook::reports::BudgetOverview;
//! use pocketbook::source::JsonFileSource;
//!
//! let snapshot = JsonFileSource::new("snapshot.json").load_all()?;
//! let overview = BudgetOverview::generate(&snapshot, Month::new(2024, 6).unwrap());
//! print!("{}", overview.format_terminal("$"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod query;
pub mod reports;
pub mod source;

#[cfg(test)]
mod fixtures;

pub use error::{PocketbookError, PocketbookResult};
