//! CLI command for the expense list

use clap::Args;

use crate::error::PocketbookResult;
use crate::models::{Snapshot, SnapshotWindow};
use crate::query::{CategoryFilter, ExpenseFilter, ExpenseQuery, SortDirection, SortKey, SortState};

use super::{parse_month, CliContext};

/// Arguments for `pocketbook expenses`
#[derive(Args, Debug, Clone, Default)]
pub struct ExpenseArgs {
    /// Case-insensitive text to find in descriptions
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category id, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Sort column: date, amount, description or category
    #[arg(long, default_value = "date")]
    pub sort: SortKey,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,

    /// Only expenses in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Show at most N expenses
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl ExpenseArgs {
    pub fn query(&self) -> ExpenseQuery {
        ExpenseQuery::new(
            ExpenseFilter::new(self.search.clone(), self.category.clone()),
            SortState::new(self.sort, self.direction),
        )
    }

    /// The snapshot narrowed to `--month`, or the whole snapshot
    pub fn scope(&self, snapshot: Snapshot) -> PocketbookResult<Snapshot> {
        match self.month.as_deref() {
            Some(month) => {
                let month = parse_month(Some(month))?;
                Ok(snapshot.restrict(&SnapshotWindow::month(month)))
            }
            None => Ok(snapshot),
        }
    }
}

/// Handle `pocketbook expenses`
pub fn handle_expenses_command(ctx: &CliContext, args: ExpenseArgs) -> PocketbookResult<()> {
    let snapshot = args.scope(ctx.load_snapshot()?)?;
    let result = args.query().run(&snapshot.expenses, &snapshot.categories);

    print!(
        "{}",
        result.format_terminal(
            &snapshot.categories,
            ctx.symbol(),
            ctx.date_format(),
            args.limit
        )
    );
    Ok(())
}
