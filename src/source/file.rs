//! Snapshot files on disk
//!
//! A snapshot file is the JSON form of `Snapshot`: three arrays named
//! `categories`, `expenses` and `budgets`, shaped like the storage service's
//! responses. Fetching from a file narrows it to the requested window.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Snapshot, SnapshotWindow};

use super::SnapshotSource;

/// Reads snapshots from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole file without narrowing it
    pub fn load_all(&self) -> PocketbookResult<Snapshot> {
        if !self.path.exists() {
            return Err(PocketbookError::snapshot_not_found(
                self.path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            PocketbookError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let snapshot: Snapshot = serde_json::from_str(&contents).map_err(|e| {
            PocketbookError::Json(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        info!(
            path = %self.path.display(),
            categories = snapshot.categories.len(),
            expenses = snapshot.expenses.len(),
            budgets = snapshot.budgets.len(),
            "loaded snapshot file"
        );
        Ok(snapshot)
    }
}

impl SnapshotSource for JsonFileSource {
    fn fetch(&self, window: &SnapshotWindow) -> PocketbookResult<Snapshot> {
        let snapshot = self.load_all()?.restrict(window);
        debug!(
            start = %window.start,
            end = %window.end,
            expenses = snapshot.expenses.len(),
            "restricted snapshot file to window"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Month;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_window() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        let source = JsonFileSource::new(&path);

        let mut snapshot = fixtures::snapshot();
        snapshot.expenses.push(fixtures::expense(
            "11",
            5000,
            "July",
            "1",
            fixtures::date(2024, 7, 2),
        ));
        fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

        assert_eq!(source.load_all().unwrap(), snapshot);

        let june = source
            .fetch(&SnapshotWindow::month(Month::new(2024, 6).unwrap()))
            .unwrap();
        assert_eq!(june.expenses.len(), 10);
        assert_eq!(june.categories.len(), 8);
        assert_eq!(june.budgets.len(), 8);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(temp_dir.path().join("nope.json"));
        let err = source.load_all().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileSource::new(&path).load_all().unwrap_err();
        assert!(matches!(err, PocketbookError::Json(_)));
    }

    #[test]
    fn test_service_shaped_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(
            &path,
            r##"{
                "categories": [{"id": 1, "name": "Food & Dining", "color": "#ef4444"}],
                "expenses": [{"id": 1, "amount": 45.5, "description": "Lunch",
                              "categoryId": 1, "date": "2024-06-15", "userId": 1}]
            }"##,
        )
        .unwrap();
        let snapshot = JsonFileSource::new(&path).load_all().unwrap();
        assert_eq!(snapshot.expenses.len(), 1);
        assert!(snapshot.budgets.is_empty());
    }
}
