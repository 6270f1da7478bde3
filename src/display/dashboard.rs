//! Dashboard display formatting
//!
//! Renders the wallet card, today's budget, the monthly summary, the saving
//! goal and the alert banner from session snapshots.

use crate::models::{Alert, AlertState, DailyBudget, MonthlySummary, SavingGoal, Wallet};
use crate::reports::{Badge, HeatmapCell};

use super::report::{format_bar, format_header, separator};

const WIDTH: usize = 44;

/// Wallet balance with initial / spent / saved metrics
pub fn format_wallet_card(wallet: &Wallet, summary: &MonthlySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", format_header(&wallet.name, WIDTH)));
    output.push_str(&format!("{}\n", separator(WIDTH)));
    output.push_str(&format!(
        "Balance:  {}{}\n",
        wallet.format_amount(wallet.current_balance),
        if wallet.is_overdrawn() { "  (overdrawn)" } else { "" }
    ));
    output.push_str(&format!(
        "Initial:  {}\n",
        wallet.format_amount(wallet.initial_balance)
    ));
    output.push_str(&format!(
        "Spent:    {}\n",
        wallet.format_amount(summary.total_spent)
    ));
    output.push_str(&format!(
        "Saved:    {}\n",
        wallet.format_amount(summary.total_saved)
    ));
    output.push_str(&format!("Status:   {}\n", wallet.status));
    output
}

/// Today's remaining allowance with a progress bar and status line
pub fn format_daily_budget(
    budget: &DailyBudget,
    percent_used: u8,
    alert: &Alert,
    symbol: &str,
) -> String {
    let status = match alert.state {
        AlertState::Normal => "✅ Within budget",
        AlertState::Warning => "⚠️  Close to limit",
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Today ({}): {} left of {}\n",
        budget.last_updated.format("%Y-%m-%d"),
        budget.today_remaining.format_with_symbol(symbol),
        budget.daily_limit.format_with_symbol(symbol)
    ));
    if budget.carried_over.is_positive() {
        output.push_str(&format!(
            "Carried over: {}\n",
            budget.carried_over.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!("[{}] {}%\n", format_bar(percent_used, 20), percent_used));
    output.push_str(&format!("{}\n", status));
    output.push_str(&format!(
        "Income: {} | Days: {}\n",
        budget.monthly_income.format_with_symbol(symbol),
        budget.days_in_month
    ));
    output
}

pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    format!(
        "Income:  {}\nSpent:   {}\nSaved:   {}\nTop category: {}\n",
        summary.total_income.format_with_symbol(symbol),
        summary.total_spent.format_with_symbol(symbol),
        summary.total_saved.format_with_symbol(symbol),
        summary.highest_spending_category.as_deref().unwrap_or("(none)")
    )
}

pub fn format_saving_goal(goal: &SavingGoal, progress: u8, symbol: &str) -> String {
    if !goal.enabled {
        return "Saving goal disabled.\n".to_string();
    }

    format!(
        "Goal: save {} | {} days left\n[{}] {}% completed\nAdjusted daily limit: {}\n",
        goal.target_amount.format_with_symbol(symbol),
        goal.remaining_days,
        format_bar(progress, 20),
        progress,
        goal.adjusted_daily_limit.format_with_symbol(symbol)
    )
}

pub fn format_alert(alert: &Alert) -> String {
    match alert.state {
        AlertState::Normal => format!("✅ {}\n", alert.message),
        AlertState::Warning => format!("⚠️  {}\n", alert.message),
    }
}

pub fn format_badges(badges: &[Badge]) -> String {
    if badges.is_empty() {
        return "Earn badges by staying under budget.\n".to_string();
    }

    let names: Vec<String> = badges.iter().map(|b| format!("[{}]", b)).collect();
    format!("{}\n", names.join(" "))
}

pub fn format_heatmap(cells: &[HeatmapCell], symbol: &str) -> String {
    if cells.is_empty() {
        return "No expenses added yet.\n".to_string();
    }

    let max = cells.iter().map(|c| c.total).max().unwrap_or_default();
    let mut output = String::new();
    for cell in cells {
        let percent = cell.total.percent_of(max).unwrap_or(0).clamp(0, 100) as u8;
        output.push_str(&format!(
            "{} {} {:>10}\n",
            cell.date.format("%Y-%m-%d"),
            format_bar(percent, 20),
            cell.total.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, WalletId};
    use chrono::NaiveDate;

    fn summary() -> MonthlySummary {
        MonthlySummary {
            total_income: Money::from_major(20000),
            total_spent: Money::from_major(7500),
            total_saved: Money::from_major(12500),
            highest_spending_category: Some("Food".into()),
        }
    }

    #[test]
    fn test_wallet_card() {
        let mut wallet = Wallet::new(
            WalletId::new("WLT5001"),
            "Main Monthly Wallet",
            "INR",
            Money::from_major(20000),
        );
        wallet.current_balance = Money::from_major(12500);

        let output = format_wallet_card(&wallet, &summary());
        assert!(output.contains("Balance:  ₹12500"));
        assert!(output.contains("Saved:    ₹12500"));
        assert!(!output.contains("overdrawn"));
    }

    #[test]
    fn test_daily_budget_status() {
        let budget = DailyBudget::new(
            Money::from_major(20000),
            30,
            true,
            true,
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
        )
        .unwrap();
        let alert = Alert {
            state: AlertState::Warning,
            message: "You have reached 80% of today's budget".into(),
            percent_used: 85,
        };

        let output = format_daily_budget(&budget, 85, &alert, "₹");
        assert!(output.contains("Close to limit"));
        assert!(output.contains("85%"));
        assert!(output.contains("Days: 30"));
    }

    #[test]
    fn test_summary_without_spending() {
        let mut s = summary();
        s.highest_spending_category = None;
        assert!(format_monthly_summary(&s, "₹").contains("Top category: (none)"));
    }

    #[test]
    fn test_badges() {
        assert_eq!(format_badges(&[]), "Earn badges by staying under budget.\n");
        assert_eq!(format_badges(&[Badge::NoSpendDay]), "[No Spend Day]\n");
    }
}
