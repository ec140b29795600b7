//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the report engine. Every command reads one
//! snapshot file and prints a view of it.

pub mod config;
pub mod expense;
pub mod export;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expenses_command, ExpenseArgs};
pub use export::{handle_export_command, ExportArgs};
pub use report::{
    handle_budget_command, handle_categories_command, handle_summary_command,
    handle_trends_command, BudgetArgs, CategoriesArgs, SummaryArgs, TrendsArgs,
};

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{PocketbookPaths, Settings};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Month, Snapshot};
use crate::source::JsonFileSource;

/// Paths, settings and overrides shared by every command
#[derive(Debug, Clone)]
pub struct CliContext {
    pub paths: PocketbookPaths,
    pub settings: Settings,
    snapshot_override: Option<PathBuf>,
}

impl CliContext {
    pub fn new(paths: PocketbookPaths, settings: Settings) -> Self {
        Self {
            paths,
            settings,
            snapshot_override: None,
        }
    }

    /// Read a snapshot from `path` instead of the configured file
    pub fn with_snapshot(mut self, path: Option<PathBuf>) -> Self {
        self.snapshot_override = path;
        self
    }

    /// Use `symbol` instead of the configured currency symbol
    pub fn with_currency(mut self, symbol: Option<String>) -> Self {
        if let Some(symbol) = symbol {
            self.settings.currency_symbol = symbol;
        }
        self
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn date_format(&self) -> &str {
        &self.settings.date_format
    }

    /// Snapshot file in effect: flag or env override, then settings, then default
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_override
            .clone()
            .unwrap_or_else(|| self.settings.snapshot_file(&self.paths))
    }

    pub fn source(&self) -> JsonFileSource {
        JsonFileSource::new(self.snapshot_path())
    }

    pub fn load_snapshot(&self) -> PocketbookResult<Snapshot> {
        let source = self.source();
        debug!(path = %source.path().display(), "loading snapshot");
        source.load_all()
    }
}

/// Parse a `YYYY-MM` month argument, defaulting to the current month
pub fn parse_month(value: Option<&str>) -> PocketbookResult<Month> {
    match value {
        Some(s) => Month::parse(s).map_err(|e| {
            PocketbookError::Validation(format!("{}. Use YYYY-MM (e.g., 2024-06)", e))
        }),
        None => Ok(Month::current()),
    }
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> PocketbookResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        PocketbookError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", value))
    })
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
