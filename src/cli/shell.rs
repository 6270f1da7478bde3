//! Interactive session shell
//!
//! Reads one command per line and applies it to an in-memory session.
//! Rejected expenses and malformed commands are reported and the shell keeps
//! going; configuration errors end it.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_expenses_csv, export_snapshot_json, export_snapshot_yaml};
use crate::models::{ExpenseInput, Money};
use crate::reports::{earned_badges, expense_heatmap};
use crate::session::Session;

use super::dashboard::write_dashboard;
use crate::display;

/// One shell line
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available inside a session
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Record an expense
    Add {
        /// Amount (e.g., "150" or "150.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Optional note
        note: Vec<String>,
        /// Expense date (YYYY-MM-DD), defaults to the session's day
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the most recent expenses
    Recent {
        #[arg(default_value_t = 5)]
        count: usize,
    },
    /// Show totals per category
    Categories,
    /// Show each category's share of spending
    Breakdown,
    /// Show this month's income, spending and savings
    Summary,
    /// Show the wallet card
    Wallet,
    /// Show today's budget
    Budget,
    /// Show saving goal progress
    Goal,
    /// Show the current alert
    Alert,
    /// Show spend per day
    Heatmap,
    /// Show earned badges
    Badges,
    /// Show the whole dashboard
    Dashboard,
    /// Start a new day
    Rollover {
        /// New day (YYYY-MM-DD)
        date: String,
    },
    /// Export the session
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
    },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// What the shell should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

/// Run commands from `input` until it ends or `quit` is read
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> BudgetResult<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(split_args(line)) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(output, "{}", e.render())?;
                continue;
            }
        };

        match execute(session, parsed.command, output) {
            Ok(ShellFlow::Quit) => break,
            Ok(ShellFlow::Continue) => {}
            Err(e @ BudgetError::Validation(_)) => writeln!(output, "Error: {}", e)?,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Apply a single command
pub fn execute<W: Write>(
    session: &mut Session,
    command: ShellCommand,
    output: &mut W,
) -> BudgetResult<ShellFlow> {
    let wallet = session.wallet();
    let symbol = wallet.currency_symbol().to_string();

    match command {
        ShellCommand::Add {
            amount,
            category,
            note,
            date,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| BudgetError::Validation(e.to_string()))?;
            let mut input = ExpenseInput::new(amount, category);
            if !note.is_empty() {
                input = input.with_note(note.join(" "));
            }
            if let Some(date) = date {
                input = input.on(parse_date(&date)?);
            }

            let record = session.record_expense(input)?;
            writeln!(
                output,
                "Recorded {}: {} {} ({})",
                record.id,
                record.category,
                record.amount.format_with_symbol(&symbol),
                record.note
            )?;

            let alert = session.alert();
            if alert.is_warning() {
                write!(output, "{}", display::format_alert(&alert))?;
            }
        }
        ShellCommand::Recent { count } => {
            let recent = session.recent_expenses(count);
            write!(output, "{}", display::format_expense_list(&recent, &symbol))?;
        }
        ShellCommand::Categories => {
            let totals = session.totals_by_category();
            write!(output, "{}", display::format_category_totals(&totals, &symbol))?;
        }
        ShellCommand::Breakdown => {
            let rows = session.category_breakdown();
            write!(output, "{}", display::format_category_breakdown(&rows, &symbol))?;
        }
        ShellCommand::Summary => {
            let summary = session.monthly_summary();
            write!(output, "{}", display::format_monthly_summary(&summary, &symbol))?;
        }
        ShellCommand::Wallet => {
            let summary = session.monthly_summary();
            write!(output, "{}", display::format_wallet_card(&wallet, &summary))?;
        }
        ShellCommand::Budget => {
            let budget = session.daily_budget();
            let percent = session.percent_used_today()?;
            write!(
                output,
                "{}",
                display::format_daily_budget(&budget, percent, &session.alert(), &symbol)
            )?;
        }
        ShellCommand::Goal => {
            let goal = session.saving_goal();
            let progress = session.saving_goal_progress(&goal)?;
            write!(output, "{}", display::format_saving_goal(&goal, progress, &symbol))?;
        }
        ShellCommand::Alert => {
            write!(output, "{}", display::format_alert(&session.alert()))?;
        }
        ShellCommand::Heatmap => {
            let cells = expense_heatmap(&session.expenses());
            write!(output, "{}", display::format_heatmap(&cells, &symbol))?;
        }
        ShellCommand::Badges => {
            let badges = earned_badges(&session.day_history());
            write!(output, "{}", display::format_badges(&badges))?;
        }
        ShellCommand::Dashboard => write_dashboard(session, output)?,
        ShellCommand::Rollover { date } => {
            let today = parse_date(&date)?;
            match session.rollover_day(today)? {
                Some(closed) => writeln!(
                    output,
                    "Closed {} with {} spent. Today is {}.",
                    closed.date,
                    closed.spent.format_with_symbol(&symbol),
                    today
                )?,
                None => writeln!(output, "Already on {}.", today)?,
            }
        }
        ShellCommand::Export { format } => match format {
            ExportFormat::Json => export_snapshot_json(session, output)?,
            ExportFormat::Yaml => export_snapshot_yaml(session, output)?,
            ExportFormat::Csv => export_expenses_csv(&session.expenses(), &mut *output)?,
        },
        ShellCommand::Quit => return Ok(ShellFlow::Quit),
    }

    Ok(ShellFlow::Continue)
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| BudgetError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Split a line on whitespace, keeping double-quoted runs together
fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }

    args
}
