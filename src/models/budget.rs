//! Daily budget model
//!
//! Derives a per-day spending allowance from monthly income and tracks how
//! much of today's allowance is left.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Monthly income split into a daily allowance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBudget {
    pub monthly_income: Money,

    /// Days in the billing month
    pub days_in_month: u32,

    /// `monthly_income / days_in_month`, floored to whole units
    pub daily_limit: Money,

    /// Unspent allowance moves into the next day
    pub carry_forward_enabled: bool,

    /// Overspend is absorbed (floored at zero) instead of blocked
    pub overspend_adjustment: bool,

    /// What is left of today's own limit; `0 <= today_remaining <= daily_limit`
    pub today_remaining: Money,

    /// Surplus brought forward from earlier days, on top of today's limit
    #[serde(default)]
    pub carried_over: Money,

    /// The day `today_remaining` refers to
    pub last_updated: NaiveDate,
}

impl DailyBudget {
    /// Create a budget for `today` with the full daily limit available
    pub fn new(
        monthly_income: Money,
        days_in_month: u32,
        carry_forward_enabled: bool,
        overspend_adjustment: bool,
        today: NaiveDate,
    ) -> Result<Self, BudgetValidationError> {
        if monthly_income.is_negative() {
            return Err(BudgetValidationError::NegativeIncome(monthly_income));
        }

        let daily_limit = monthly_income
            .split_floor(days_in_month)
            .ok_or(BudgetValidationError::NoDaysInMonth)?
            .floor_major();

        if daily_limit.is_zero() {
            return Err(BudgetValidationError::ZeroDailyLimit);
        }

        Ok(Self {
            monthly_income,
            days_in_month,
            daily_limit,
            carry_forward_enabled,
            overspend_adjustment,
            today_remaining: daily_limit,
            carried_over: Money::zero(),
            last_updated: today,
        })
    }

    /// Everything still spendable today, including carried surplus
    pub fn available_today(&self) -> Money {
        self.today_remaining.saturating_add(self.carried_over)
    }
}

impl fmt::Display for DailyBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} left",
            self.last_updated.format("%Y-%m-%d"),
            self.today_remaining,
            self.daily_limit
        )
    }
}

/// A closed day, recorded when the allocator rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,

    /// Daily limit plus carried surplus at the start of the day
    pub allowance: Money,

    /// Everything consumed that day, including absorbed overspend
    pub spent: Money,
}

impl DayRecord {
    pub fn is_under_budget(&self) -> bool {
        self.spent <= self.allowance
    }

    pub fn is_no_spend(&self) -> bool {
        self.spent.is_zero()
    }
}

/// Validation errors for daily budget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeIncome(Money),
    NoDaysInMonth,
    ZeroDailyLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIncome(income) => {
                write!(f, "Monthly income cannot be negative (got {})", income)
            }
            Self::NoDaysInMonth => write!(f, "Days in month must be positive"),
            Self::ZeroDailyLimit => {
                write!(f, "Monthly income is too small to give a daily limit")
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
