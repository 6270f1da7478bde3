//! Budget session
//!
//! A `Session` is the single owner of the wallet, the daily budget, the
//! expense ledger, the saving goal and the alert state. Callers change it only
//! through [`Session::record_expense`] and [`Session::rollover_day`]; every
//! read returns a snapshot.
//!
//! `record_expense` either applies all of its effects (ledger append, wallet
//! debit, allowance consumption, goal and alert refresh) or none of them.
//! Holding `&mut Session` for the whole call gives that guarantee; a
//! concurrent embedding must keep a single writer, e.g. behind one lock.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Alert, CategoryShare, DailyBudget, DayRecord, ExpenseInput, ExpenseRecord, Money,
    MonthlySummary, SavingGoal, Wallet,
};
use crate::services::{AlertEvaluator, BudgetAllocator, Ledger, MetricsService};

#[derive(Debug, Clone)]
pub struct Session {
    ledger: Ledger,
    allocator: BudgetAllocator,
    goal: SavingGoal,
    alerts: AlertEvaluator,
}

impl Session {
    /// Build a session from validated settings
    ///
    /// The session starts on the configured start date, or on `today` when
    /// the settings carry none. Opening expenses are replayed through
    /// [`Session::record_expense`].
    pub fn new(config: &SessionConfig, today: NaiveDate) -> BudgetResult<Self> {
        config.validate()?;

        let start = config.start_date_or(today);
        let mut session = Self::from_parts(
            config.wallet(),
            config.daily_budget(start)?,
            config.saving_goal()?,
            config.warning_at()?,
        )?;

        for input in &config.opening_expenses {
            session.record_expense(input.clone())?;
        }

        Ok(session)
    }

    /// Assemble a session from already-built parts
    pub fn from_parts(
        wallet: Wallet,
        budget: DailyBudget,
        goal: SavingGoal,
        warning_at: u8,
    ) -> BudgetResult<Self> {
        if budget.daily_limit.is_zero() {
            return Err(BudgetError::Config("Daily limit is zero".into()));
        }
        if !goal.target_amount.is_positive() {
            return Err(BudgetError::Config(format!(
                "Saving goal target must be positive (got {})",
                goal.target_amount
            )));
        }

        let mut session = Self {
            ledger: Ledger::new(wallet),
            allocator: BudgetAllocator::new(budget),
            goal,
            alerts: AlertEvaluator::new(warning_at)?,
        };
        session.refresh_goal();
        session.alerts.start_day(session.allocator.percent_used_today()?);
        Ok(session)
    }

    /// Record a new expense
    ///
    /// Fails with a validation error, leaving everything untouched, when the
    /// amount is not positive, the category is blank, the wallet is not
    /// active, or overspend is blocked and the expense exceeds what is left
    /// today. The date defaults to the session's current day; only expenses
    /// dated today draw on today's allowance.
    pub fn record_expense(&mut self, input: ExpenseInput) -> BudgetResult<ExpenseRecord> {
        self.ledger.check(&input)?;

        let today = self.allocator.today();
        let date = input.date.unwrap_or(today);
        let is_today = date == today;

        if is_today
            && !self.allocator.budget().overspend_adjustment
            && self.allocator.would_overspend(input.amount)
        {
            return Err(BudgetError::Validation(format!(
                "Expense of {} exceeds today's remaining allowance of {}",
                input.amount,
                self.allocator.available_today()
            )));
        }

        let record = self.ledger.record_expense(&input, date)?;
        if is_today {
            self.allocator.consume_today(record.amount);
        }

        self.refresh_goal();
        match self.allocator.percent_used_today() {
            Ok(percent) => self.alerts.observe(percent),
            Err(e) => warn!(error = %e, "Could not evaluate budget alert"),
        }

        Ok(record)
    }

    /// Move the session to `today`
    ///
    /// Returns the closed day, or `None` if `today` is already current.
    pub fn rollover_day(&mut self, today: NaiveDate) -> BudgetResult<Option<DayRecord>> {
        let previous = self.allocator.today();
        let Some(closed) = self.allocator.rollover_day(today) else {
            return Ok(None);
        };

        let elapsed = (today - previous).num_days().max(0);
        self.goal.elapse(u32::try_from(elapsed).unwrap_or(u32::MAX));
        self.refresh_goal();
        self.alerts.start_day(self.allocator.percent_used_today()?);

        Ok(Some(closed))
    }

    fn refresh_goal(&mut self) {
        let saved = self.metrics().monthly_summary().total_saved;
        let budget = self.allocator.budget();
        self.goal
            .recompute(budget.monthly_income, budget.days_in_month, saved);
        debug!(adjusted_daily_limit = %self.goal.adjusted_daily_limit, "Refreshed saving goal");
    }

    fn metrics(&self) -> MetricsService<'_> {
        MetricsService::new(&self.ledger, self.allocator.budget())
    }

    /// The session's current calendar day
    pub fn today(&self) -> NaiveDate {
        self.allocator.today()
    }

    pub fn wallet(&self) -> Wallet {
        self.ledger.wallet().clone()
    }

    pub fn daily_budget(&self) -> DailyBudget {
        self.allocator.budget().clone()
    }

    pub fn saving_goal(&self) -> SavingGoal {
        self.goal.clone()
    }

    /// Every recorded expense in insertion order
    pub fn expenses(&self) -> Vec<ExpenseRecord> {
        self.ledger.expenses().to_vec()
    }

    /// Up to `n` expenses, most recent first
    pub fn recent_expenses(&self, n: usize) -> Vec<ExpenseRecord> {
        self.ledger.recent_expenses(n)
    }

    pub fn totals_by_category(&self) -> Vec<(String, Money)> {
        self.ledger.totals_by_category()
    }

    pub fn monthly_summary(&self) -> MonthlySummary {
        self.metrics().monthly_summary()
    }

    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        self.metrics().category_breakdown()
    }

    pub fn saving_goal_progress(&self, goal: &SavingGoal) -> BudgetResult<u8> {
        self.metrics().saving_goal_progress(goal)
    }

    pub fn spent_today(&self) -> Money {
        self.allocator.spent_today()
    }

    pub fn percent_used_today(&self) -> BudgetResult<u8> {
        self.allocator.percent_used_today()
    }

    pub fn alert(&self) -> Alert {
        self.alerts.current()
    }

    /// Days closed by rollovers, oldest first
    pub fn day_history(&self) -> Vec<DayRecord> {
        self.allocator.history().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertState, WalletStatus};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn session() -> Session {
        Session::new(&SessionConfig::sample(), day(17)).unwrap()
    }

    fn expense(amount: i64, category: &str) -> ExpenseInput {
        ExpenseInput::new(Money::from_major(amount), category)
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert_eq!(session.today(), day(17));
        assert_eq!(session.daily_budget().daily_limit, Money::from_major(666));
        assert_eq!(session.daily_budget().today_remaining, Money::from_major(666));
        assert_eq!(session.alert().state, AlertState::Normal);
    }

    #[test]
    fn test_record_expense_scenario() {
        let mut session = session();
        session.record_expense(expense(150, "Food")).unwrap();
        session.record_expense(expense(80, "Travel")).unwrap();

        assert_eq!(session.daily_budget().today_remaining, Money::from_major(436));
        assert_eq!(session.spent_today(), Money::from_major(230));
        assert_eq!(session.percent_used_today().unwrap(), 35);
        assert_eq!(session.wallet().current_balance, Money::from_major(19770));
        assert_eq!(session.alert().state, AlertState::Normal);
    }

    #[test]
    fn test_warning_scenario() {
        let mut session = session();
        session.record_expense(expense(566, "Shopping")).unwrap();

        assert_eq!(session.daily_budget().today_remaining, Money::from_major(100));
        assert_eq!(session.percent_used_today().unwrap(), 85);
        let alert = session.alert();
        assert_eq!(alert.state, AlertState::Warning);
        assert_eq!(alert.message, "You have reached 80% of today's budget");
    }

    #[test]
    fn test_rollover_clears_warning() {
        let mut session = session();
        session.record_expense(expense(600, "Shopping")).unwrap();
        assert!(session.alert().is_warning());

        let closed = session.rollover_day(day(18)).unwrap().unwrap();
        assert_eq!(closed.spent, Money::from_major(600));
        assert_eq!(session.alert().state, AlertState::Normal);
        assert_eq!(session.daily_budget().carried_over, Money::from_major(66));
        assert_eq!(session.saving_goal().remaining_days, 12);

        assert!(session.rollover_day(day(18)).unwrap().is_none());
        assert_eq!(session.saving_goal().remaining_days, 12);
        assert_eq!(session.day_history().len(), 1);
    }

    #[test]
    fn test_invalid_expense_is_atomic() {
        let mut session = session();
        session.record_expense(expense(100, "Food")).unwrap();
        let wallet = session.wallet();
        let budget = session.daily_budget();

        assert!(session.record_expense(expense(0, "Food")).unwrap_err().is_validation());
        assert!(session.record_expense(expense(-5, "Food")).unwrap_err().is_validation());
        assert!(session.record_expense(expense(10, " ")).unwrap_err().is_validation());

        assert_eq!(session.wallet(), wallet);
        assert_eq!(session.daily_budget(), budget);
        assert_eq!(session.expenses().len(), 1);
    }

    #[test]
    fn test_overspend_absorbed_by_default() {
        let mut session = session();
        session.record_expense(expense(1000, "Rent")).unwrap();
        assert_eq!(session.daily_budget().today_remaining, Money::zero());
        assert_eq!(session.percent_used_today().unwrap(), 100);
        assert_eq!(session.alert().message, "You have used all of today's budget");
    }

    #[test]
    fn test_overspend_blocked_when_adjustment_disabled() {
        let mut config = SessionConfig::sample();
        config.daily_budget.overspend_adjustment = false;
        let mut session = Session::new(&config, day(17)).unwrap();

        session.record_expense(expense(600, "Food")).unwrap();
        let err = session.record_expense(expense(67, "Food")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.expenses().len(), 1);
        assert_eq!(session.daily_budget().today_remaining, Money::from_major(66));

        session.record_expense(expense(66, "Food")).unwrap();
        assert_eq!(session.daily_budget().today_remaining, Money::zero());
    }

    #[test]
    fn test_backdated_expense_leaves_allowance_alone() {
        let mut session = session();
        let record = session
            .record_expense(expense(300, "Travel").on(day(10)))
            .unwrap();

        assert_eq!(record.date, day(10));
        assert_eq!(session.daily_budget().today_remaining, Money::from_major(666));
        assert_eq!(session.wallet().current_balance, Money::from_major(19700));
        assert_eq!(session.monthly_summary().total_spent, Money::from_major(300));
    }

    #[test]
    fn test_oversized_expense_rejected_without_changes() {
        let mut session = session();
        let huge = ExpenseInput::new(Money::parse("92233720368547758").unwrap(), "Food");

        session.record_expense(huge.clone()).unwrap();
        let wallet = session.wallet();
        let budget = session.daily_budget();
        let summary = session.monthly_summary();

        let err = session.record_expense(huge).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.wallet(), wallet);
        assert_eq!(session.daily_budget(), budget);
        assert_eq!(session.monthly_summary(), summary);
        assert_eq!(session.expenses().len(), 1);
        assert_eq!(session.percent_used_today().unwrap(), 100);
        assert_eq!(session.saving_goal().adjusted_daily_limit, Money::zero());
    }

    #[test]
    fn test_closed_wallet_rejects_expenses() {
        let mut config = SessionConfig::sample();
        config.wallet.status = WalletStatus::Closed;
        let mut session = Session::new(&config, day(17)).unwrap();

        assert!(session.record_expense(expense(10, "Food")).unwrap_err().is_validation());
    }

    #[test]
    fn test_opening_expenses_replayed() {
        let mut config = SessionConfig::sample();
        config.start_date = Some(day(17));
        config.opening_expenses = vec![
            expense(150, "Food").with_note("Lunch with friends"),
            expense(80, "Travel").with_note("Auto fare"),
        ];
        let session = Session::new(&config, day(1)).unwrap();

        assert_eq!(session.today(), day(17));
        let recent = session.recent_expenses(5);
        assert_eq!(recent[0].id.to_string(), "EXP102");
        assert_eq!(recent[0].note, "Auto fare");
        assert_eq!(session.daily_budget().today_remaining, Money::from_major(436));
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut config = SessionConfig::sample();
        config.saving_goal.target_amount = Money::zero();
        assert!(Session::new(&config, day(1)).unwrap_err().is_config());

        let mut config = SessionConfig::sample();
        config.daily_budget.monthly_income = Money::from_major(10);
        assert!(Session::new(&config, day(1)).unwrap_err().is_config());
    }

    #[test]
    fn test_empty_session_reads() {
        let session = session();
        assert_eq!(session.monthly_summary().total_spent, Money::zero());
        assert!(session.category_breakdown().is_empty());
        assert!(session.recent_expenses(5).is_empty());
        assert!(session.totals_by_category().is_empty());
    }

    #[test]
    fn test_goal_progress_and_adjusted_limit() {
        let mut session = session();
        session
            .record_expense(expense(7500, "Food").on(day(10)))
            .unwrap();

        let goal = session.saving_goal();
        assert_eq!(session.saving_goal_progress(&goal).unwrap(), 100);
        assert_eq!(goal.adjusted_daily_limit, Money::from_major(666));

        session
            .record_expense(expense(11000, "Rent").on(day(11)))
            .unwrap();
        // saved 1500 of 3000: (8666.66 − 1500) / 13 = 551.28
        let goal = session.saving_goal();
        assert_eq!(goal.adjusted_daily_limit, Money::from_major(551));
        assert_eq!(session.saving_goal_progress(&goal).unwrap(), 50);
    }

    #[test]
    fn test_balance_invariant_holds() {
        let mut session = session();
        let mut total = Money::zero();
        for (i, amount) in [150, 80, 2000, 5, 40_000].iter().enumerate() {
            session.record_expense(expense(*amount, "Misc")).unwrap();
            total += Money::from_major(*amount);
            let wallet = session.wallet();
            assert_eq!(wallet.current_balance, wallet.initial_balance - total);
            session.rollover_day(day(18 + i as u32)).unwrap();
        }
    }
}
