//! CLI commands for reports
//!
//! Dashboard summary, category breakdown, budget overview and spending trends.

use clap::Args;

use crate::display::{format_category_list, format_palette, format_percentage};
use crate::error::PocketbookResult;
use crate::reports::{
    BudgetOverview, CategoryTotals, DashboardSummary, SpendingTrend, TimeRange,
};

use super::{parse_date, parse_month, today, CliContext};

/// Arguments for `pocketbook summary`
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    /// Month to summarize (YYYY-MM, default: current month)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Number of recent expenses to list
    #[arg(short, long)]
    pub recent: Option<usize>,
}

/// Arguments for `pocketbook categories`
#[derive(Args, Debug, Clone, Default)]
pub struct CategoriesArgs {
    /// Month to break down (YYYY-MM, default: current month)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Include the Unknown group for expenses whose category no longer exists
    #[arg(long)]
    pub include_unknown: bool,

    /// Show only the top N categories (bare --top uses the configured count)
    #[arg(long)]
    pub top: Option<Option<usize>>,

    /// List the categories themselves instead of spending
    #[arg(long, conflicts_with_all = ["top", "include_unknown", "month"])]
    pub list: bool,

    /// Show the color palette for new categories
    #[arg(long, conflicts_with_all = ["top", "include_unknown", "month", "list"])]
    pub palette: bool,
}

/// Arguments for `pocketbook budget`
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// Budget month (YYYY-MM, default: current month)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Only show budgets that are over
    #[arg(long)]
    pub over: bool,
}

/// Arguments for `pocketbook trends`
#[derive(Args, Debug, Clone, Default)]
pub struct TrendsArgs {
    /// Preset range ending this month: 3m, 6m or 1y (default from settings)
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub range: Option<TimeRange>,

    /// First day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "end")]
    pub start: Option<String>,

    /// Last day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "start")]
    pub end: Option<String>,
}

/// Handle `pocketbook summary`
pub fn handle_summary_command(ctx: &CliContext, args: SummaryArgs) -> PocketbookResult<()> {
    let month = parse_month(args.month.as_deref())?;
    let snapshot = ctx.load_snapshot()?;
    let recent = args.recent.unwrap_or(ctx.settings.recent_expenses);

    let summary = DashboardSummary::generate(&snapshot, month, recent);
    print!("{}", summary.format_terminal(ctx.symbol(), ctx.date_format()));
    Ok(())
}

/// Handle `pocketbook categories`
pub fn handle_categories_command(ctx: &CliContext, args: CategoriesArgs) -> PocketbookResult<()> {
    let snapshot = ctx.load_snapshot()?;

    if args.list {
        print!("{}", format_category_list(&snapshot.categories, ctx.symbol()));
        return Ok(());
    }
    if args.palette {
        print!("{}", format_palette(&snapshot.categories));
        return Ok(());
    }

    let month = parse_month(args.month.as_deref())?;
    let totals = CategoryTotals::generate(snapshot.expenses_in(month), &snapshot.categories);

    if let Some(n) = args.top.map(|n| n.unwrap_or(ctx.settings.top_categories)) {
        println!("Top {} Spending Categories - {}\n", n, month.label());
        println!("{:<28} {:>12} {:>8}", "Category", "Amount", "%");
        println!("{}", "-".repeat(50));
        for row in totals.top(n) {
            println!(
                "{:<28} {:>12} {:>8}",
                row.name,
                row.total_amount.format_with_symbol(ctx.symbol()),
                format_percentage(totals.share_percent(row))
            );
        }
        println!(
            "\nTotal Spending: {}",
            totals.overall_total.format_with_symbol(ctx.symbol())
        );
    } else {
        println!("{}\n", month.label());
        print!("{}", totals.format_terminal(ctx.symbol(), args.include_unknown));
    }

    if !args.include_unknown {
        if let Some(unknown) = totals.unknown() {
            println!(
                "\n{} in {} expense(s) belongs to deleted categories (use --include-unknown)",
                unknown.total_amount.format_with_symbol(ctx.symbol()),
                unknown.transaction_count
            );
        }
    }

    Ok(())
}

/// Handle `pocketbook budget`
pub fn handle_budget_command(ctx: &CliContext, args: BudgetArgs) -> PocketbookResult<()> {
    let month = parse_month(args.month.as_deref())?;
    let snapshot = ctx.load_snapshot()?;
    let overview = BudgetOverview::generate(&snapshot, month);

    if args.over {
        let over = overview.over_budget();
        if over.is_empty() {
            println!("No budgets are over for {}.", month.label());
        }
        for line in over {
            let by = line.usage.over_budget_by().unwrap_or_default();
            println!(
                "{}: over budget by {} ({:.1}% used)",
                line.category_name,
                by.format_with_symbol(ctx.symbol()),
                line.usage.usage_percent
            );
        }
    } else {
        print!("{}", overview.format_terminal(ctx.symbol()));
    }

    Ok(())
}

/// Handle `pocketbook trends`
pub fn handle_trends_command(ctx: &CliContext, args: TrendsArgs) -> PocketbookResult<()> {
    let snapshot = ctx.load_snapshot()?;

    let trend = match (args.start.as_deref(), args.end.as_deref()) {
        (Some(start), Some(end)) => {
            SpendingTrend::generate(&snapshot.expenses, parse_date(start)?, parse_date(end)?)
        }
        _ => {
            let range = args.range.unwrap_or_else(|| ctx.settings.trend_range());
            SpendingTrend::for_range(&snapshot.expenses, range, today())
        }
    };

    print!("{}", trend.format_terminal(ctx.symbol()));
    Ok(())
}
