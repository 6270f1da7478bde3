//! Budget allocator
//!
//! Keeps today's allowance in step with posted expenses and moves the budget
//! from one calendar day to the next.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{DailyBudget, DayRecord, Money};

/// Owner of the daily budget and the history of closed days
#[derive(Debug, Clone)]
pub struct BudgetAllocator {
    budget: DailyBudget,
    /// Everything consumed today, including absorbed overspend
    day_spent: Money,
    /// Limit plus carried surplus at the start of today
    day_allowance: Money,
    history: Vec<DayRecord>,
}

impl BudgetAllocator {
    pub fn new(budget: DailyBudget) -> Self {
        let day_allowance = budget.available_today();
        Self {
            budget,
            day_spent: Money::zero(),
            day_allowance,
            history: Vec::new(),
        }
    }

    pub fn budget(&self) -> &DailyBudget {
        &self.budget
    }

    /// The calendar day the allowance refers to
    pub fn today(&self) -> NaiveDate {
        self.budget.last_updated
    }

    /// Today's remaining limit plus any carried surplus
    pub fn available_today(&self) -> Money {
        self.budget.available_today()
    }

    /// Whether posting `amount` today would spend more than is available
    pub fn would_overspend(&self, amount: Money) -> bool {
        amount > self.available_today()
    }

    /// Take `amount` out of today's allowance
    ///
    /// Draws on today's own limit first, then on carried surplus. Anything
    /// beyond that is absorbed: neither figure ever goes below zero.
    pub fn consume_today(&mut self, amount: Money) {
        self.day_spent = self.day_spent.saturating_add(amount);

        let from_limit = amount.min(self.budget.today_remaining);
        self.budget.today_remaining -= from_limit;

        let rest = amount - from_limit;
        if rest.is_positive() {
            self.budget.carried_over = (self.budget.carried_over - rest).floor_zero();
        }

        debug!(
            amount = %amount,
            today_remaining = %self.budget.today_remaining,
            carried_over = %self.budget.carried_over,
            "Consumed daily allowance"
        );
    }

    /// Start a new calendar day
    ///
    /// Does nothing when `today` is the day already in effect. Otherwise the
    /// previous day is closed into the history and returned, the limit is
    /// restored, and with carry-forward the unspent allowance is kept as
    /// surplus.
    pub fn rollover_day(&mut self, today: NaiveDate) -> Option<DayRecord> {
        let previous = self.budget.last_updated;
        if today == previous {
            return None;
        }

        if today < previous {
            warn!(from = %previous, to = %today, "Rolling the budget back to an earlier day");
        }

        let closed = DayRecord {
            date: previous,
            allowance: self.day_allowance,
            spent: self.day_spent,
        };
        self.history.push(closed);

        let surplus = if self.budget.carry_forward_enabled {
            self.available_today().floor_zero()
        } else {
            Money::zero()
        };

        self.budget.today_remaining = self.budget.daily_limit;
        self.budget.carried_over = surplus;
        self.budget.last_updated = today;
        self.day_spent = Money::zero();
        self.day_allowance = self.available_today();

        info!(
            closed = %previous,
            today = %today,
            spent = %closed.spent,
            carried_over = %surplus,
            "Rolled over daily budget"
        );

        Some(closed)
    }

    /// `max(0, daily_limit − today_remaining)`
    pub fn spent_today(&self) -> Money {
        (self.budget.daily_limit - self.budget.today_remaining).floor_zero()
    }

    /// Share of today's limit already spent, 0..=100
    pub fn percent_used_today(&self) -> BudgetResult<u8> {
        let percent = self
            .spent_today()
            .percent_of(self.budget.daily_limit)
            .ok_or_else(|| BudgetError::Config("Daily limit is zero".into()))?;
        Ok(percent.min(100) as u8)
    }

    /// Days closed by earlier rollovers, oldest first
    pub fn history(&self) -> &[DayRecord] {
        &self.history
    }
}
