//! CLI commands for configuration

use clap::Subcommand;

use crate::error::PocketbookResult;

use super::CliContext;

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,

    /// Change a setting and save it
    Set {
        /// Setting name (currency_symbol, date_format, trend_months,
        /// recent_expenses, top_categories, snapshot_path)
        key: String,

        /// New value (empty clears snapshot_path)
        value: String,
    },

    /// Write the settings file with current values
    Init,
}

/// Handle config commands
pub fn handle_config_command(
    ctx: &CliContext,
    cmd: Option<ConfigCommands>,
) -> PocketbookResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            print!("{}", format_config(ctx));
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut settings = ctx.settings.clone();
            settings.set(&key, &value)?;
            settings.save(&ctx.paths)?;
            println!("Set {} = {}", key, value);
            Ok(())
        }
        ConfigCommands::Init => {
            ctx.settings.save(&ctx.paths)?;
            println!("Settings written to: {}", ctx.paths.settings_file().display());
            Ok(())
        }
    }
}

fn format_config(ctx: &CliContext) -> String {
    let settings = &ctx.settings;
    let mut output = String::new();
    output.push_str("Pocketbook Configuration\n");
    output.push_str("========================\n");
    output.push_str(&format!("Base directory:   {}\n", ctx.paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", ctx.paths.settings_file().display()));
    output.push_str(&format!("Snapshot file:    {}\n", ctx.snapshot_path().display()));
    output.push_str(&format!("Export directory: {}\n", ctx.paths.export_dir().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  currency_symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("  date_format:     {}\n", settings.date_format));
    output.push_str(&format!("  trend_months:    {}\n", settings.trend_months));
    output.push_str(&format!("  recent_expenses: {}\n", settings.recent_expenses));
    output.push_str(&format!("  top_categories:  {}\n", settings.top_categories));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PocketbookPaths, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ctx = CliContext::new(paths.clone(), Settings::default());

        handle_config_command(
            &ctx,
            Some(ConfigCommands::Set {
                key: "currency_symbol".into(),
                value: "€".into(),
            }),
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_show_lists_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ctx = CliContext::new(paths, Settings::default());
        let output = format_config(&ctx);
        assert!(output.contains("snapshot.json"));
        assert!(output.contains("trend_months:    6"));
    }
}
