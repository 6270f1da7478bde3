//! Saving goal model
//!
//! A savings target for the rest of the billing month and the daily limit
//! that would still reach it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    pub enabled: bool,

    /// Amount to have saved by the end of the period; always positive
    pub target_amount: Money,

    /// Days left in the period
    pub remaining_days: u32,

    /// Daily spend that keeps the goal reachable
    pub adjusted_daily_limit: Money,
}

impl SavingGoal {
    pub fn new(
        enabled: bool,
        target_amount: Money,
        remaining_days: u32,
    ) -> Result<Self, GoalValidationError> {
        if !target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(target_amount));
        }

        Ok(Self {
            enabled,
            target_amount,
            remaining_days,
            adjusted_daily_limit: Money::zero(),
        })
    }

    /// What still has to be put aside to hit the target
    pub fn shortfall(&self, total_saved: Money) -> Money {
        self.target_amount.saturating_sub(total_saved).floor_zero()
    }

    /// Recompute `adjusted_daily_limit`
    ///
    /// `max(0, (income × remaining / days − shortfall) / remaining)`, floored
    /// to whole units; zero once no days remain.
    pub fn recompute(&mut self, monthly_income: Money, days_in_month: u32, total_saved: Money) {
        self.adjusted_daily_limit = if self.remaining_days == 0 {
            Money::zero()
        } else {
            monthly_income
                .scale_floor(self.remaining_days, days_in_month)
                .and_then(|income_left| {
                    (income_left - self.shortfall(total_saved)).split_floor(self.remaining_days)
                })
                .map(|limit| limit.floor_zero().floor_major())
                .unwrap_or_default()
        };
    }

    /// Count down the remaining days
    pub fn elapse(&mut self, days: u32) {
        self.remaining_days = self.remaining_days.saturating_sub(days);
    }
}

impl fmt::Display for SavingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "save {} in {} days ({} per day)",
            self.target_amount, self.remaining_days, self.adjusted_daily_limit
        )
    }
}

/// Validation errors for saving goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTarget(amount) => {
                write!(f, "Saving goal target must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
