//! `init` and `config` command handlers

use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::{ConfigPaths, SessionConfig};
use crate::error::{BudgetError, BudgetResult};

/// Write the sample configuration to the config directory
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init<W: Write>(paths: &ConfigPaths, force: bool, output: &mut W) -> BudgetResult<()> {
    let path = paths.config_file();
    if paths.is_initialized() && !force {
        return Err(BudgetError::Config(format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    paths.ensure_directories()?;
    SessionConfig::sample().save(&path)?;
    info!(path = %path.display(), "Wrote sample configuration");

    writeln!(output, "Initialized daybudget at: {}", paths.base_dir().display())?;
    writeln!(output)?;
    writeln!(output, "Edit {} to set your wallet and income,", path.display())?;
    writeln!(output, "then run 'daybudget session' to start tracking.")?;
    Ok(())
}

/// Show where configuration is read from and what it contains
pub fn handle_config<W: Write>(
    paths: &ConfigPaths,
    config_path: Option<&Path>,
    output: &mut W,
) -> BudgetResult<()> {
    let default_path = paths.config_file();
    let path = config_path.unwrap_or(&default_path);

    writeln!(output, "daybudget Configuration")?;
    writeln!(output, "=======================")?;
    writeln!(output, "Config directory: {}", paths.base_dir().display())?;
    writeln!(output, "Config file:      {}", path.display())?;
    writeln!(output)?;

    if !path.exists() {
        writeln!(output, "No config file found. Run 'daybudget init' to create one.")?;
        return Ok(());
    }

    let config = SessionConfig::load(path)?;
    let wallet = config.wallet();
    let budget = config.daily_budget(config.start_date_or(chrono::NaiveDate::MIN))?;
    let symbol = wallet.currency_symbol();

    writeln!(output, "Settings:")?;
    writeln!(output, "  Wallet:          {} ({})", wallet.name, wallet.id)?;
    writeln!(output, "  Currency:        {}", wallet.currency)?;
    writeln!(
        output,
        "  Monthly income:  {}",
        budget.monthly_income.format_with_symbol(symbol)
    )?;
    writeln!(
        output,
        "  Daily limit:     {}",
        budget.daily_limit.format_with_symbol(symbol)
    )?;
    writeln!(output, "  Carry forward:   {}", budget.carry_forward_enabled)?;
    writeln!(output, "  Absorb overspend: {}", budget.overspend_adjustment)?;
    writeln!(output, "  Warning at:      {}%", config.warning_at()?)?;
    Ok(())
}
