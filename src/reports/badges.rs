//! Spending badges
//!
//! Rewards earned from the history of closed days.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::DayRecord;

/// Consecutive under-budget days needed for the streak badge
pub const STREAK_FOR_BADGE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Badge {
    /// A closed day with nothing spent
    NoSpendDay,
    /// Consecutive closed days at or under their allowance
    DaysUnderBudget(usize),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSpendDay => write!(f, "No Spend Day"),
            Self::DaysUnderBudget(days) => write!(f, "{} Days Under Budget", days),
        }
    }
}

/// Longest run of consecutive under-budget days
pub fn longest_under_budget_streak(history: &[DayRecord]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<&DayRecord> = None;

    for day in history {
        let follows = previous
            .map(|p| day.date.signed_duration_since(p.date).num_days() == 1)
            .unwrap_or(false);

        current = match (day.is_under_budget(), follows) {
            (false, _) => 0,
            (true, true) => current + 1,
            (true, false) => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }

    longest
}

/// Every badge earned so far
pub fn earned_badges(history: &[DayRecord]) -> Vec<Badge> {
    let mut badges = Vec::new();

    let streak = longest_under_budget_streak(history);
    if streak >= STREAK_FOR_BADGE {
        badges.push(Badge::DaysUnderBudget(STREAK_FOR_BADGE));
    }

    if history.iter().any(DayRecord::is_no_spend) {
        badges.push(Badge::NoSpendDay);
    }

    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn closed(d: u32, spent: i64) -> DayRecord {
        DayRecord {
            date: NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
            allowance: Money::from_major(666),
            spent: Money::from_major(spent),
        }
    }

    #[test]
    fn test_no_history_no_badges() {
        assert!(earned_badges(&[]).is_empty());
        assert_eq!(longest_under_budget_streak(&[]), 0);
    }

    #[test]
    fn test_streak_badge() {
        let history: Vec<DayRecord> = (1..=7).map(|d| closed(d, 500)).collect();
        assert_eq!(longest_under_budget_streak(&history), 7);
        assert_eq!(earned_badges(&history), vec![Badge::DaysUnderBudget(7)]);
        assert_eq!(Badge::DaysUnderBudget(7).to_string(), "7 Days Under Budget");
    }

    #[test]
    fn test_streak_broken_by_overspend_and_gaps() {
        let history = vec![
            closed(1, 100),
            closed(2, 700),
            closed(3, 100),
            closed(4, 100),
            closed(6, 100),
        ];
        assert_eq!(longest_under_budget_streak(&history), 2);
    }

    #[test]
    fn test_no_spend_badge() {
        let history = vec![closed(1, 100), closed(2, 0)];
        assert_eq!(earned_badges(&history), vec![Badge::NoSpendDay]);
        assert_eq!(Badge::NoSpendDay.to_string(), "No Spend Day");
    }
}
