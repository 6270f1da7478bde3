//! `session` and `demo` command handlers

use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

use crate::config::{ConfigPaths, SessionConfig};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseInput, Money};
use crate::session::Session;

use super::dashboard::write_dashboard;
use super::shell::{parse_date, run_shell};

/// Resolve the day a command runs on
pub fn resolve_today(today: Option<&str>) -> BudgetResult<NaiveDate> {
    match today {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Start a session from a config file and run the shell over `input`
pub fn handle_session<R: BufRead, W: Write>(
    paths: &ConfigPaths,
    config_path: Option<&Path>,
    today: NaiveDate,
    input: R,
    output: &mut W,
) -> BudgetResult<()> {
    let default_path = paths.config_file();
    let path = config_path.unwrap_or(&default_path);
    if !path.exists() {
        return Err(BudgetError::Config(format!(
            "No config file at {}. Run 'daybudget init' first.",
            path.display()
        )));
    }

    let config = SessionConfig::load(path)?;
    let mut session = Session::new(&config, today)?;
    session.rollover_day(today)?;
    info!(wallet = %session.wallet().id, %today, "Session started");

    writeln!(
        output,
        "daybudget session for {} on {}. Type 'help' for commands.",
        session.wallet().name,
        session.today()
    )?;
    run_shell(&mut session, input, output)
}

/// The sample wallet with a couple of expenses already recorded
pub fn demo_session(today: NaiveDate) -> BudgetResult<Session> {
    let mut config = SessionConfig::sample();
    config.start_date = Some(today);
    config.opening_expenses = vec![
        ExpenseInput::new(Money::from_major(150), "Food").with_note("Lunch with friends"),
        ExpenseInput::new(Money::from_major(80), "Travel").with_note("Auto fare"),
    ];
    Session::new(&config, today)
}

/// Print the dashboard for the demo session
pub fn handle_demo<W: Write>(today: NaiveDate, output: &mut W) -> BudgetResult<()> {
    let session = demo_session(today)?;
    write_dashboard(&session, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_resolve_today() {
        assert_eq!(resolve_today(Some("2025-01-17")).unwrap(), day(17));
        assert!(resolve_today(Some("17/01/2025")).unwrap_err().is_validation());
        assert!(resolve_today(None).is_ok());
    }

    #[test]
    fn test_session_requires_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = handle_session(&paths, None, day(17), "".as_bytes(), &mut Vec::new())
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_session_rolls_to_today() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut config = SessionConfig::sample();
        config.start_date = Some(day(16));
        config.opening_expenses = vec![ExpenseInput::new(Money::from_major(600), "Food")];
        config.save(&paths.config_file()).unwrap();

        let mut output = Vec::new();
        handle_session(&paths, None, day(17), "budget\n".as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("on 2025-01-17"));
        assert!(text.contains("₹666 left of ₹666"));
        assert!(text.contains("Carried over: ₹66"));
    }

    #[test]
    fn test_demo_dashboard() {
        let mut output = Vec::new();
        handle_demo(day(17), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("₹436 left of ₹666"));
        assert!(text.contains("Auto fare"));
        assert!(text.contains("Top category: Food"));
    }
}
