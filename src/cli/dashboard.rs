//! Full dashboard rendering
//!
//! Writes every dashboard section, in the order a user reads them.

use std::io::Write;

use crate::display;
use crate::error::BudgetResult;
use crate::reports::{earned_badges, expense_heatmap};
use crate::session::Session;

const RECENT_COUNT: usize = 5;

pub fn write_dashboard<W: Write>(session: &Session, output: &mut W) -> BudgetResult<()> {
    let wallet = session.wallet();
    let symbol = wallet.currency_symbol();
    let summary = session.monthly_summary();
    let goal = session.saving_goal();

    write!(output, "{}", display::format_wallet_card(&wallet, &summary))?;
    writeln!(output)?;

    writeln!(output, "Daily Budget")?;
    write!(
        output,
        "{}",
        display::format_daily_budget(
            &session.daily_budget(),
            session.percent_used_today()?,
            &session.alert(),
            symbol
        )
    )?;
    writeln!(output)?;

    writeln!(output, "Recent Expenses")?;
    write!(
        output,
        "{}",
        display::format_expense_list(&session.recent_expenses(RECENT_COUNT), symbol)
    )?;
    writeln!(output)?;

    writeln!(output, "Category Breakdown")?;
    write!(
        output,
        "{}",
        display::format_category_breakdown(&session.category_breakdown(), symbol)
    )?;
    writeln!(output)?;

    writeln!(output, "Monthly Summary")?;
    write!(output, "{}", display::format_monthly_summary(&summary, symbol))?;
    writeln!(output)?;

    writeln!(output, "Saving Goal")?;
    write!(
        output,
        "{}",
        display::format_saving_goal(&goal, session.saving_goal_progress(&goal)?, symbol)
    )?;
    writeln!(output)?;

    writeln!(output, "Spending Heatmap")?;
    write!(
        output,
        "{}",
        display::format_heatmap(&expense_heatmap(&session.expenses()), symbol)
    )?;
    writeln!(output)?;

    writeln!(output, "Badges")?;
    write!(
        output,
        "{}",
        display::format_badges(&earned_badges(&session.day_history()))
    )?;
    write!(output, "{}", display::format_alert(&session.alert()))?;

    Ok(())
}
