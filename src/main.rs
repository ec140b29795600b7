use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use pocketbook::cli::{
    handle_budget_command, handle_categories_command, handle_config_command,
    handle_expenses_command, handle_export_command, handle_summary_command,
    handle_trends_command, BudgetArgs, CategoriesArgs, CliContext, ConfigCommands, ExpenseArgs,
    ExportArgs, SummaryArgs, TrendsArgs,
};
use pocketbook::config::{PocketbookPaths, Settings};
use pocketbook::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Expense reports from the command line",
    long_about = "Pocketbook reads a snapshot of your categories, expenses and monthly \
                  budgets and reports on it: a monthly dashboard, spending per category, \
                  budget usage, spending trends and CSV export."
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Snapshot file to read instead of the configured one
    #[arg(long, env = "POCKETBOOK_SNAPSHOT", global = true)]
    snapshot: Option<PathBuf>,

    /// Currency symbol for this run
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly dashboard: totals, budget usage, spending shares and recent expenses
    #[command(alias = "dashboard")]
    Summary(SummaryArgs),

    /// Spending per category for a month
    Categories(CategoriesArgs),

    /// Budget usage per category for a month
    Budget(BudgetArgs),

    /// Monthly spending over a range
    Trends(TrendsArgs),

    /// Search, filter and sort expenses
    #[command(alias = "ls")]
    Expenses(ExpenseArgs),

    /// Export expenses as CSV
    Export(ExportArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(paths, settings)
        .with_snapshot(cli.snapshot)
        .with_currency(cli.currency);

    match cli.command {
        Some(Commands::Summary(args)) => handle_summary_command(&ctx, args)?,
        Some(Commands::Categories(args)) => handle_categories_command(&ctx, args)?,
        Some(Commands::Budget(args)) => handle_budget_command(&ctx, args)?,
        Some(Commands::Trends(args)) => handle_trends_command(&ctx, args)?,
        Some(Commands::Expenses(args)) => handle_expenses_command(&ctx, args)?,
        Some(Commands::Export(args)) => handle_export_command(&ctx, args)?,
        Some(Commands::Config { command }) => handle_config_command(&ctx, command)?,
        None => {
            println!("Pocketbook - expense reports from the command line");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
            println!("Run 'pocketbook summary' for this month's dashboard.");
        }
    }

    Ok(())
}
