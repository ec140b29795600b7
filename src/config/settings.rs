//! User settings for Pocketbook
//!
//! Display preferences and report defaults. Every field has a default, so a
//! settings file written by an older version still loads.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::reports::TimeRange;

/// User settings for Pocketbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Months shown by the trends report (3, 6 or 12)
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,

    /// Recent expenses listed on the dashboard
    #[serde(default = "default_recent_expenses")]
    pub recent_expenses: usize,

    /// Categories listed in the top-spending summary
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Snapshot file to read instead of `<base>/data/snapshot.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_trend_months() -> u32 {
    6
}

fn default_recent_expenses() -> usize {
    5
}

fn default_top_categories() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            trend_months: default_trend_months(),
            recent_expenses: default_recent_expenses(),
            top_categories: default_top_categories(),
            snapshot_path: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PocketbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PocketbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Snapshot file to read, honoring the override
    pub fn snapshot_file(&self, paths: &PocketbookPaths) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| paths.snapshot_file())
    }

    /// Trend preset for `trend_months`, falling back to six months
    pub fn trend_range(&self) -> TimeRange {
        TimeRange::from_months(self.trend_months).unwrap_or_default()
    }

    /// Set one setting from its name and textual value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PocketbookError> {
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "date_format" => self.date_format = value.to_string(),
            "trend_months" => {
                let months: u32 = value.parse().map_err(|e| invalid_value(key, e))?;
                if TimeRange::from_months(months).is_none() {
                    return Err(invalid_value(key, "expected 3, 6 or 12"));
                }
                self.trend_months = months;
            }
            "recent_expenses" => {
                self.recent_expenses = value
                    .parse::<usize>()
                    .map_err(|e| invalid_value(key, e))?;
            }
            "top_categories" => {
                self.top_categories = value
                    .parse::<usize>()
                    .map_err(|e| invalid_value(key, e))?;
            }
            "snapshot_path" => {
                self.snapshot_path = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => {
                return Err(PocketbookError::Config(format!(
                    "Unknown setting '{}'",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn invalid_value(key: &str, reason: impl std::fmt::Display) -> PocketbookError {
    PocketbookError::Config(format!("Invalid value for {}: {}", key, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.trend_months, 6);
        assert_eq!(settings.recent_expenses, 5);
        assert_eq!(settings.trend_range(), TimeRange::SixMonths);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.trend_months = 12;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.trend_range(), TimeRange::OneYear);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.top_categories, 5);
        assert!(settings.snapshot_path.is_none());
    }

    #[test]
    fn test_snapshot_file_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        assert_eq!(settings.snapshot_file(&paths), paths.snapshot_file());

        settings.snapshot_path = Some(PathBuf::from("/tmp/other.json"));
        assert_eq!(settings.snapshot_file(&paths), PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_set_values() {
        let mut settings = Settings::default();
        settings.set("trend_months", "3").unwrap();
        assert_eq!(settings.trend_range(), TimeRange::ThreeMonths);

        assert!(settings.set("trend_months", "4").is_err());
        assert!(settings.set("recent_expenses", "many").is_err());
        assert!(settings.set("colour", "red").is_err());

        settings.set("snapshot_path", "/data/s.json").unwrap();
        assert!(settings.snapshot_path.is_some());
        settings.set("snapshot_path", "").unwrap();
        assert!(settings.snapshot_path.is_none());
    }
}
