//! Metrics service
//!
//! Pure derivations over the ledger and the daily budget. Nothing here is
//! cached; every call reads the latest committed state.

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryShare, DailyBudget, Money, MonthlySummary, SavingGoal};
use crate::services::ledger::{category_totals, Ledger};

/// Read-only view used to compute dashboard metrics
pub struct MetricsService<'a> {
    ledger: &'a Ledger,
    budget: &'a DailyBudget,
}

impl<'a> MetricsService<'a> {
    pub fn new(ledger: &'a Ledger, budget: &'a DailyBudget) -> Self {
        Self { ledger, budget }
    }

    /// Income, spend and savings for the month containing the current day
    pub fn monthly_summary(&self) -> MonthlySummary {
        let month_totals = category_totals(self.ledger.expenses_in_month(self.budget.last_updated));
        let total_spent: Money = month_totals.iter().map(|(_, amount)| amount).sum();

        // strictly greater, so the first category to reach the maximum wins ties
        let mut highest: Option<&(String, Money)> = None;
        for entry in &month_totals {
            if highest.map_or(true, |best| entry.1 > best.1) {
                highest = Some(entry);
            }
        }

        let summary = MonthlySummary {
            total_income: self.budget.monthly_income,
            total_spent,
            total_saved: self.budget.monthly_income - total_spent,
            highest_spending_category: highest.map(|(name, _)| name.clone()),
        };

        debug!(
            total_spent = %summary.total_spent,
            total_saved = %summary.total_saved,
            "Computed monthly summary"
        );

        summary
    }

    /// Each category spent on this month, with its rounded share of the
    /// month's spending
    ///
    /// Covers the same expenses as [`Self::monthly_summary`]; rows are in
    /// first-use order. With nothing spent every share is 0%.
    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        let totals = category_totals(self.ledger.expenses_in_month(self.budget.last_updated));
        let total: Money = totals.iter().map(|(_, amount)| amount).sum();

        totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percent_of_total: amount.percent_of(total).unwrap_or(0),
                category,
                amount,
            })
            .collect()
    }

    /// Progress toward `goal` as a percentage clamped to 0..=100
    pub fn saving_goal_progress(&self, goal: &SavingGoal) -> BudgetResult<u8> {
        let saved = self.monthly_summary().total_saved;
        let percent = saved.percent_of(goal.target_amount).ok_or_else(|| {
            BudgetError::Config(format!(
                "Saving goal target must be positive (got {})",
                goal.target_amount
            ))
        })?;
        Ok(percent.clamp(0, 100) as u8)
    }
}
