//! CLI command for CSV export
//!
//! The exporter only produces CSV; creating the file is done here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::{export_expenses_csv, export_file_name};
use crate::models::{Expense, Snapshot, SnapshotWindow};
use crate::query::{CategoryFilter, ExpenseFilter, ExpenseQuery, SortDirection, SortKey, SortState};

use super::{parse_month, today, CliContext};

/// Arguments for `pocketbook export`
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Output file (default: <base>/exports/expenses-<today>.csv)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Only expenses in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Case-insensitive text to find in descriptions
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category id, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Sort before exporting (default: snapshot order)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort direction when sorting: asc or desc
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,
}

impl ExportArgs {
    fn scope(&self, snapshot: Snapshot) -> PocketbookResult<Snapshot> {
        match self.month.as_deref() {
            Some(month) => {
                let month = parse_month(Some(month))?;
                Ok(snapshot.restrict(&SnapshotWindow::month(month)))
            }
            None => Ok(snapshot),
        }
    }

    /// Expenses to export, filtered and (if asked) sorted
    pub fn select<'a>(&self, snapshot: &'a Snapshot) -> Vec<&'a Expense> {
        let filter = ExpenseFilter::new(self.search.clone(), self.category.clone());
        match self.sort {
            Some(key) => ExpenseQuery::new(filter, SortState::new(key, self.direction))
                .run(&snapshot.expenses, &snapshot.categories)
                .expenses,
            None => snapshot
                .expenses
                .iter()
                .filter(|e| filter.matches(e))
                .collect(),
        }
    }
}

/// Handle `pocketbook export`
pub fn handle_export_command(ctx: &CliContext, args: ExportArgs) -> PocketbookResult<()> {
    let snapshot = args.scope(ctx.load_snapshot()?)?;
    let expenses = args.select(&snapshot);

    if args.stdout {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        export_expenses_csv(expenses, &snapshot.categories, &mut handle)?;
        handle.flush()?;
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => {
            ctx.paths.ensure_directories()?;
            ctx.paths.export_dir().join(export_file_name(today()))
        }
    };

    let file = File::create(&path).map_err(|e| {
        PocketbookError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let rows = export_expenses_csv(expenses, &snapshot.categories, &mut writer)?;
    writer.flush()?;

    println!("Exported {} expense(s) to: {}", rows, path.display());
    Ok(())
}
